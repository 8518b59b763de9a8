#![warn(missing_docs, unused_imports)]

//! _This is a part of **mulgamal**. For more information, head to the
//! [mulgamal](https://crates.io/crates/mulgamal) crate homepage._
//!
//! General traits for the multiplicatively homomorphic ElGamal cryptosystem, and the randomness
//! capability that encryption draws its ephemeral secrets from.

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// General notion of a cryptosystem's keys.
pub mod cryptosystems;

/// Homomorphic operations on ciphertexts.
pub mod homomorphic;

/// Scrubbing of secret integers before their memory is released.
pub mod secret;
