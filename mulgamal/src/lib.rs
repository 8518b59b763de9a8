#![doc = include_str!("../README.md")]
#![warn(unused_imports)]

mod arithmetic;

/// Errors returned by every fallible operation in this crate.
pub mod error;

/// Domain parameters of the group and well-known groups.
pub mod params;

/// ElGamal public and private keys.
pub mod keys;

/// ElGamal ciphertexts and their homomorphic combination.
pub mod ciphertext;

/// Hexadecimal document and transport encodings of keys and ciphertexts.
pub mod encoding;

pub use ciphertext::Ciphertext;
pub use encoding::{Document, DocumentEncoding};
pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
pub use mulgamal_traits;
pub use params::DomainParameters;
