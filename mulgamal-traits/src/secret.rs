use gmp_mpfr_sys::gmp;
use rug::Integer;
use zeroize::Zeroize;

/// Overwrites every allocated limb of `integer` with zeros and sets its value to zero.
pub fn wipe(integer: &mut Integer) {
    unsafe {
        let raw: *mut gmp::mpz_t = integer.as_raw_mut();
        let alloc = (*raw).alloc.max(0) as usize;
        // `d` always points at `alloc` limbs owned by this integer.
        std::slice::from_raw_parts_mut((*raw).d.as_ptr(), alloc).zeroize();
        (*raw).size = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::wipe;
    use rug::Integer;

    #[test]
    fn test_wipe_clears_value() {
        let mut secret = Integer::from(Integer::u_pow_u(7, 300));
        wipe(&mut secret);

        assert_eq!(Integer::new(), secret);

        let mut empty = Integer::new();
        wipe(&mut empty);
        assert_eq!(Integer::new(), empty);
    }

    #[test]
    fn test_wiped_integer_is_reusable() {
        let mut secret = Integer::from(Integer::u_pow_u(3, 200));
        wipe(&mut secret);
        secret += 5;

        assert_eq!(Integer::from(5), secret);
    }
}
