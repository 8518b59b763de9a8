//! Here is an example of how to encrypt a byte string with an ElGamal public key and decrypt it
//! again with the matching private key.
//! ```
//! use mulgamal::keys::PrivateKey;
//! use mulgamal::params::DomainParameters;
//! use mulgamal_traits::randomness::GeneralRng;
//! use rand::rngs::OsRng;
//! use rug::Integer;
//!
//! let mut rng = GeneralRng::new(OsRng);
//! let params = DomainParameters::rfc5114_1024();
//! let secret_key = PrivateKey::from_exponent(&params, Integer::from(0x42)).unwrap();
//!
//! let ciphertext = secret_key.public_key().encrypt_bytes(b"hello world", &mut rng).unwrap();
//! assert_eq!(b"hello world".to_vec(), secret_key.decrypt_bytes(&ciphertext).unwrap());
//! ```

use crate::arithmetic::{integer_from_bytes, integer_to_bytes, pow_mod, wipe};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::params::DomainParameters;
use mulgamal_traits::cryptosystems::{DecryptionKey, EncryptionKey};
use mulgamal_traits::randomness::{GeneralRng, SecureRng};
use rug::Integer;
use std::fmt;
use tracing::{debug, trace};

/// Public key containing the generator `g`, the prime modulus `p` and the public value
/// $y = g^x \mod p$.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PublicKey {
    pub(crate) g: Integer,
    pub(crate) p: Integer,
    pub(crate) y: Integer,
}

/// Private key holding the public key by value and the secret exponent `x`. The limbs of `x` are
/// overwritten with zeros when the key is dropped.
#[derive(PartialEq, Eq, Clone)]
pub struct PrivateKey {
    pub(crate) public_key: PublicKey,
    pub(crate) x: Integer,
}

impl PublicKey {
    /// Creates a public key after checking that $1 < p$, $0 < g < p$ and $0 < y < p$. Whether `p`
    /// is prime or `g` generates the group is not verified.
    pub fn new(g: Integer, p: Integer, y: Integer) -> Result<Self> {
        let params = DomainParameters::new(g, p)?;
        if y <= 0 || y >= params.p {
            return Err(Error::InvalidKey("y must lie in (0, p)"));
        }

        Ok(PublicKey {
            g: params.g,
            p: params.p,
            y,
        })
    }

    /// The generator.
    pub fn g(&self) -> &Integer {
        &self.g
    }

    /// The prime modulus.
    pub fn p(&self) -> &Integer {
        &self.p
    }

    /// The public value $g^x \mod p$.
    pub fn y(&self) -> &Integer {
        &self.y
    }

    /// Encrypts `plaintext`, read as a big-endian unsigned integer. The integer must be smaller
    /// than `p`; larger values are silently reduced modulo `p`.
    pub fn encrypt_bytes<R: SecureRng>(
        &self,
        plaintext: &[u8],
        rng: &mut GeneralRng<R>,
    ) -> Result<Ciphertext> {
        let mut message = integer_from_bytes(plaintext);
        let ciphertext = self.encrypt(&message, rng);
        wipe(&mut message);
        ciphertext
    }
}

impl EncryptionKey for PublicKey {
    type Plaintext = Integer;
    type Ciphertext = Ciphertext;
    type Error = Error;

    /// Encrypts an integer $0 \le m < p$ as $(g^k, y^k \cdot m)$ for an ephemeral $k$ drawn
    /// uniformly from $[0, p)$. A negative plaintext fails with [`Error::OutOfRange`].
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
    /// let ciphertext = secret_key.public_key().encrypt(&Integer::from(15), &mut rng).unwrap();
    /// println!("The decrypted message is {}", secret_key.decrypt(&ciphertext).unwrap());
    /// // Prints: "The decrypted message is 15".
    /// ```
    fn encrypt<R: SecureRng>(
        &self,
        plaintext: &Integer,
        rng: &mut GeneralRng<R>,
    ) -> Result<Ciphertext> {
        if *plaintext < 0 {
            debug!("rejecting negative plaintext");
            return Err(Error::OutOfRange { field: "plaintext" });
        }

        let mut k = rng.random_below(&self.p)?;
        trace!(modulus_bits = self.p.significant_bits(), "encrypting");

        let c1 = pow_mod(&self.g, &k, &self.p);
        let shared_secret = pow_mod(&self.y, &k, &self.p);
        wipe(&mut k);

        let mut shared_secret = shared_secret?;
        let c2 = Integer::from(&shared_secret * plaintext) % &self.p;
        wipe(&mut shared_secret);

        Ok(Ciphertext {
            c1: c1?,
            c2,
            p: self.p.clone(),
        })
    }
}

impl PrivateKey {
    /// Creates a private key after checking that $0 < x < p - 1$ and that the public value of
    /// `public_key` equals $g^x \mod p$.
    pub fn new(public_key: PublicKey, x: Integer) -> Result<Self> {
        // Built first so that every rejection below still wipes `x` on drop.
        let key = PrivateKey { public_key, x };

        if key.x <= 0 || key.x >= Integer::from(&key.public_key.p - 1) {
            return Err(Error::InvalidKey("x must lie in (0, p - 1)"));
        }
        if pow_mod(&key.public_key.g, &key.x, &key.public_key.p)? != key.public_key.y {
            return Err(Error::KeyMismatch);
        }

        Ok(key)
    }

    /// Derives the public value $y = g^x \mod p$ for a caller-chosen secret exponent `x` and
    /// returns the resulting private key.
    pub fn from_exponent(params: &DomainParameters, mut x: Integer) -> Result<Self> {
        let y = match pow_mod(&params.g, &x, &params.p) {
            Ok(y) => y,
            Err(err) => {
                wipe(&mut x);
                return Err(err);
            }
        };

        match params.public_key(y) {
            Ok(public_key) => PrivateKey::new(public_key, x),
            Err(err) => {
                wipe(&mut x);
                Err(err)
            }
        }
    }

    /// The public half of this key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The secret exponent.
    pub fn x(&self) -> &Integer {
        &self.x
    }

    /// Decrypts `ciphertext` into the minimal big-endian encoding of the plaintext integer.
    /// Leading zero bytes of the original plaintext are not recovered.
    pub fn decrypt_bytes(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        let mut message = self.decrypt(ciphertext)?;
        let bytes = integer_to_bytes(&message);
        wipe(&mut message);
        Ok(bytes)
    }

    fn check_modulus(&self, ciphertext: &Ciphertext) -> Result<()> {
        if ciphertext.p != self.public_key.p {
            debug!(
                key_bits = self.public_key.p.significant_bits(),
                ciphertext_bits = ciphertext.p.significant_bits(),
                "rejecting ciphertext under a different modulus"
            );
            return Err(Error::ModulusMismatch {
                expected: self.public_key.p.clone(),
                found: ciphertext.p.clone(),
            });
        }
        Ok(())
    }
}

impl DecryptionKey<PublicKey> for PrivateKey {
    /// Decrypts an ElGamal ciphertext as $c_2 \cdot (c_1^x)^{-1} \mod p$. Fails with
    /// [`Error::ModulusMismatch`] if the ciphertext was produced under another modulus, and with
    /// [`Error::NotInvertible`] if $c_1^x$ has no inverse (for instance when $c_1 = 0$).
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Integer> {
        self.check_modulus(ciphertext)?;
        let p = &self.public_key.p;

        let mut shared_secret = pow_mod(&ciphertext.c1, &self.x, p)?;
        let inverse = shared_secret.invert_ref(p).map(Integer::from);
        wipe(&mut shared_secret);

        match inverse {
            Some(mut inverse) => {
                let message = Integer::from(&inverse * &ciphertext.c2) % p;
                wipe(&mut inverse);
                Ok(message)
            }
            None => {
                debug!("shared secret is not invertible");
                Err(Error::NotInvertible)
            }
        }
    }

    fn decrypt_identity(&self, ciphertext: &Ciphertext) -> Result<bool> {
        self.check_modulus(ciphertext)?;

        let mut shared_secret = pow_mod(&ciphertext.c1, &self.x, &self.public_key.p)?;
        if shared_secret == 0 {
            debug!("shared secret is not invertible");
            return Err(Error::NotInvertible);
        }
        let is_identity = ciphertext.c2 == shared_secret;
        wipe(&mut shared_secret);
        Ok(is_identity)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        wipe(&mut self.x);
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .field("x", &"<redacted>")
            .finish()
    }
}
