use crate::randomness::{GeneralRng, SecureRng};
use std::fmt::Debug;

/// The encryption key. Anyone who has access to it can encrypt plaintexts into ciphertexts.
///
/// Key material is always supplied by the caller; this trait says nothing about how the key came
/// to be.
pub trait EncryptionKey: Sized + Debug + PartialEq {
    /// The type of the plaintexts to be encrypted.
    type Plaintext;
    /// The type of the encrypted plaintexts.
    type Ciphertext;
    /// The error returned when encryption or decryption under this key fails.
    type Error;

    /// Encrypt the plaintext using the public key and a cryptographic RNG. Fails only when the
    /// RNG does.
    fn encrypt<R: SecureRng>(
        &self,
        plaintext: &Self::Plaintext,
        rng: &mut GeneralRng<R>,
    ) -> Result<Self::Ciphertext, Self::Error>;
}

/// The decryption key.
pub trait DecryptionKey<PK: EncryptionKey> {
    /// Decrypt the ciphertext using the secret key.
    fn decrypt(&self, ciphertext: &PK::Ciphertext) -> Result<PK::Plaintext, PK::Error>;

    /// Returns true if the ciphertext encrypts the identity of the plaintext group. This is
    /// cheaper than a full decryption.
    fn decrypt_identity(&self, ciphertext: &PK::Ciphertext) -> Result<bool, PK::Error>;
}
