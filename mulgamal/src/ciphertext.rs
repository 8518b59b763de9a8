use crate::arithmetic::pow_mod;
use crate::error::{Error, Result};
use mulgamal_traits::homomorphic::HomomorphicMultiplication;
use rug::Integer;
use std::ops::Mul;
use tracing::debug;

/// ElGamal ciphertext of integers. It carries the modulus it was produced under, so that
/// ciphertexts can be combined without the key at hand.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Ciphertext {
    pub(crate) c1: Integer,
    pub(crate) c2: Integer,
    pub(crate) p: Integer,
}

impl Ciphertext {
    /// Assembles a ciphertext from its components after checking that $1 < p$ and that both
    /// components lie in $[0, p)$.
    pub fn new(c1: Integer, c2: Integer, p: Integer) -> Result<Self> {
        if p <= 1 {
            return Err(Error::OutOfRange { field: "p" });
        }
        if c1 < 0 || c1 >= p {
            return Err(Error::OutOfRange { field: "c1" });
        }
        if c2 < 0 || c2 >= p {
            return Err(Error::OutOfRange { field: "c2" });
        }

        Ok(Ciphertext { c1, c2, p })
    }

    /// First component, $g^k \mod p$.
    pub fn c1(&self) -> &Integer {
        &self.c1
    }

    /// Second component, $y^k \cdot m \mod p$.
    pub fn c2(&self) -> &Integer {
        &self.c2
    }

    /// The modulus this ciphertext was produced under.
    pub fn p(&self) -> &Integer {
        &self.p
    }

    /// Stores the homomorphic product of `a` and `b` in `self` and returns it. Fails with
    /// [`Error::ModulusMismatch`] when `a` and `b` are under different moduli, leaving `self`
    /// untouched.
    /// ```
    /// # use mulgamal::keys::PrivateKey;
    /// # use mulgamal::params::DomainParameters;
    /// # use mulgamal_traits::cryptosystems::{DecryptionKey, EncryptionKey};
    /// # use mulgamal_traits::randomness::GeneralRng;
    /// # use rand::rngs::OsRng;
    /// # use rug::Integer;
    /// # let mut rng = GeneralRng::new(OsRng);
    /// # let params = DomainParameters::new(Integer::from(33), Integer::from(71)).unwrap();
    /// # let secret_key = PrivateKey::from_exponent(&params, Integer::from(42)).unwrap();
    /// let ciphertext_1 = secret_key.public_key().encrypt(&Integer::from(11), &mut rng).unwrap();
    /// let ciphertext_2 = secret_key.public_key().encrypt(&Integer::from(12), &mut rng).unwrap();
    ///
    /// let mut product = ciphertext_1.clone();
    /// product.multiply(&ciphertext_1, &ciphertext_2).unwrap();
    ///
    /// println!("[11] * [12] = [{}]", secret_key.decrypt(&product).unwrap());
    /// // Prints: "[11] * [12] = [61]", as 132 mod 71 = 61.
    /// ```
    pub fn multiply(&mut self, a: &Ciphertext, b: &Ciphertext) -> Result<&mut Self> {
        *self = HomomorphicMultiplication::mul(a, b)?;
        Ok(self)
    }
}

impl HomomorphicMultiplication for Ciphertext {
    type Input = Integer;
    type Error = Error;

    fn mul(&self, rhs: &Ciphertext) -> Result<Ciphertext> {
        if self.p != rhs.p {
            debug!(
                lhs_bits = self.p.significant_bits(),
                rhs_bits = rhs.p.significant_bits(),
                "refusing to combine ciphertexts under different moduli"
            );
            return Err(Error::ModulusMismatch {
                expected: self.p.clone(),
                found: rhs.p.clone(),
            });
        }

        Ok(self * rhs)
    }

    fn pow(&self, input: &Integer) -> Result<Ciphertext> {
        Ok(Ciphertext {
            c1: pow_mod(&self.c1, input, &self.p)?,
            c2: pow_mod(&self.c2, input, &self.p)?,
            p: self.p.clone(),
        })
    }
}

impl Mul for &Ciphertext {
    type Output = Ciphertext;

    /// Homomorphic operation between two ElGamal ciphertexts. The modulus of the left operand is
    /// used for both components. Release builds do not compare the moduli and silently produce a
    /// meaningless ciphertext on a mismatch; debug builds panic on a mismatch through
    /// `debug_assert_eq!`. See [`HomomorphicMultiplication::mul`] for the variant that returns
    /// [`Error::ModulusMismatch`] instead.
    fn mul(self, rhs: Self) -> Ciphertext {
        debug_assert_eq!(self.p, rhs.p);

        Ciphertext {
            c1: Integer::from(&self.c1 * &rhs.c1) % &self.p,
            c2: Integer::from(&self.c2 * &rhs.c2) % &self.p,
            p: self.p.clone(),
        }
    }
}
