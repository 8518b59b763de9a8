use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mulgamal::{Ciphertext, DocumentEncoding, DomainParameters, PrivateKey};
use mulgamal_traits::cryptosystems::{DecryptionKey, EncryptionKey};
use mulgamal_traits::homomorphic::HomomorphicMultiplication;
use mulgamal_traits::randomness::GeneralRng;
use rand::rngs::OsRng;
use rug::Integer;

fn elgamal_benchmark(c: &mut Criterion) {
    // Ignore noise up to 5%
    let mut group = c.benchmark_group("integer_elgamal");
    group.noise_threshold(0.05);

    let mut rng = GeneralRng::new(OsRng);
    let secret_key =
        PrivateKey::from_exponent(&DomainParameters::rfc5114_1024(), Integer::from(0x42))
            .unwrap();
    let public_key = secret_key.public_key();
    let plaintext = Integer::from(123456789u64);

    group.bench_function("encrypt", |b| {
        b.iter(|| black_box(public_key.encrypt(&plaintext, &mut rng).unwrap()))
    });

    let ciphertext_a = public_key.encrypt(&plaintext, &mut rng).unwrap();
    let ciphertext_b = public_key.encrypt(&plaintext, &mut rng).unwrap();

    group.bench_function("decrypt", |b| {
        b.iter(|| black_box(secret_key.decrypt(&ciphertext_a).unwrap()))
    });

    group.bench_function("mul", |b| {
        b.iter(|| black_box(ciphertext_a.mul(&ciphertext_b).unwrap()))
    });

    group.finish();
}

fn encoding_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let mut rng = GeneralRng::new(OsRng);
    let secret_key =
        PrivateKey::from_exponent(&DomainParameters::rfc5114_1024(), Integer::from(0x42))
            .unwrap();
    let ciphertext = secret_key
        .public_key()
        .encrypt(&Integer::from(123456789u64), &mut rng)
        .unwrap();
    let transport = ciphertext.to_transport();

    group.bench_function("to_transport", |b| {
        b.iter(|| black_box(ciphertext.to_transport()))
    });

    group.bench_function("from_transport", |b| {
        b.iter(|| black_box(Ciphertext::from_transport(&transport).unwrap()))
    });

    group.bench_function("to_document", |b| {
        b.iter(|| black_box(secret_key.to_document()))
    });

    group.finish();
}

criterion_group!(benches, elgamal_benchmark, encoding_benchmark);
criterion_main!(benches);
