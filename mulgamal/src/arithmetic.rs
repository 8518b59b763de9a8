use crate::error::{Error, Result};
use rug::integer::Order;
use rug::Integer;
use std::cmp::Ordering;

pub(crate) use mulgamal_traits::secret::wipe;

/// Computes $base^{exponent} \mod modulus$. Uses GMP's side-channel resistant exponentiation
/// whenever it applies (positive exponent, odd modulus), which covers every secret exponent over
/// a prime group. A zero exponent or an even modulus falls back to the regular routine.
pub(crate) fn pow_mod(base: &Integer, exponent: &Integer, modulus: &Integer) -> Result<Integer> {
    if exponent.cmp0() == Ordering::Greater && modulus.is_odd() {
        return Ok(Integer::from(base.secure_pow_mod_ref(exponent, modulus)));
    }

    match base.pow_mod_ref(exponent, modulus) {
        Some(incomplete) => Ok(Integer::from(incomplete)),
        None => Err(Error::NotInvertible),
    }
}

/// Interprets `bytes` as a big-endian unsigned integer.
pub(crate) fn integer_from_bytes(bytes: &[u8]) -> Integer {
    Integer::from_digits(bytes, Order::Msf)
}

/// Minimal big-endian encoding of `integer`. Zero encodes as the empty byte string.
pub(crate) fn integer_to_bytes(integer: &Integer) -> Vec<u8> {
    integer.to_digits::<u8>(Order::Msf)
}
