use mulgamal_traits::randomness::RandomnessError;

/// Errors that can occur while encrypting, decrypting, combining or decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The random source failed while drawing the ephemeral exponent.
    #[error("randomness unavailable: {0}")]
    Randomness(#[from] RandomnessError),

    /// A serialized field is not base-16 text; carries the field name and the raw text.
    #[error("field `{field}` is not valid hexadecimal: {raw:?}")]
    HexDecode { field: &'static str, raw: String },

    /// A serialized mapping lacks a required key.
    #[error("field `{field}` is missing")]
    MissingField { field: &'static str },

    /// Two values that must share a modulus do not.
    #[error("modulus mismatch: expected {expected:x}, found {found:x}")]
    ModulusMismatch {
        expected: rug::Integer,
        found: rug::Integer,
    },

    /// The shared secret $c_1^x$ has no inverse modulo `p`, so no plaintext exists.
    #[error("shared secret has no inverse modulo p")]
    NotInvertible,

    /// A value lies outside its allowed range, such as a negative plaintext or a component not
    /// below `p`.
    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },

    /// Key or domain parameter components violate their range constraints.
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// The secret exponent does not produce the public value.
    #[error("public value y does not match g^x mod p")]
    KeyMismatch,

    /// Input is not a JSON object of strings.
    #[cfg(feature = "serde")]
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
