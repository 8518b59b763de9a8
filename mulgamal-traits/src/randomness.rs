use rug::integer::Order;
use crate::secret::wipe;
use rug::Integer;
use zeroize::Zeroize;

/// Any RNG that implements both `RngCore` and `CryptoRng`, so that it is cryptographically secure.
pub trait SecureRng: rand_core::RngCore + rand_core::CryptoRng {}

impl<R: rand_core::RngCore + rand_core::CryptoRng> SecureRng for R {}

/// Errors that arise while drawing randomness.
#[derive(Debug, thiserror::Error)]
pub enum RandomnessError {
    /// The underlying random source could not produce bytes.
    #[error("random source failed: {0}")]
    Source(#[from] rand_core::Error),
    /// There is no non-negative integer below the requested limit.
    #[error("cannot sample from an empty range")]
    EmptyRange,
}

/// General RNG that can be used for all dependencies.
pub struct GeneralRng<R: SecureRng> {
    rng: R,
}

impl<R: SecureRng> GeneralRng<R> {
    /// Creates a new `GeneralRng` based on an RNG that implements both `RngCore` and `CryptoRng`
    /// to ensure that the underlying RNG is indeed cryptographically secure.
    pub fn new(rng: R) -> Self {
        GeneralRng { rng }
    }

    /// Exposes the underlying RNG.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Draws an integer uniformly at random from $[0, limit)$. Bytes are requested through
    /// `try_fill_bytes`, so a failing source surfaces as [`RandomnessError::Source`] instead of
    /// a panic. Candidates of the same bit length as `limit` are rejected until one falls below it;
    /// rejected candidates and the byte buffer are wiped.
    /// ```
    /// # use mulgamal_traits::randomness::GeneralRng;
    /// # use rand::rngs::OsRng;
    /// # use rug::Integer;
    /// let mut rng = GeneralRng::new(OsRng);
    /// let value = rng.random_below(&Integer::from(71)).unwrap();
    /// assert!(value < 71);
    /// ```
    pub fn random_below(&mut self, limit: &Integer) -> Result<Integer, RandomnessError> {
        if *limit <= 0 {
            return Err(RandomnessError::EmptyRange);
        }

        let bits = limit.significant_bits();
        let byte_count = ((bits + 7) / 8) as usize;
        let top_mask = 0xffu8 >> (byte_count as u32 * 8 - bits);

        let mut buffer = vec![0u8; byte_count];
        let result = loop {
            if let Err(err) = self.rng.try_fill_bytes(&mut buffer) {
                buffer.zeroize();
                return Err(err.into());
            }
            buffer[0] &= top_mask;

            let mut candidate = Integer::from_digits(&buffer, Order::Msf);
            if candidate < *limit {
                break candidate;
            }
            wipe(&mut candidate);
        };

        buffer.zeroize();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneralRng, RandomnessError};
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;
    use rug::Integer;

    struct BrokenRng;

    impl rand_core::RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::new("entropy exhausted"))
        }
    }

    impl rand_core::CryptoRng for BrokenRng {}

    /// Replays a fixed byte sequence.
    struct ScriptedRng {
        bytes: Vec<u8>,
        position: usize,
    }

    impl rand_core::RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            rand_core::impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            rand_core::impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = self.bytes[self.position];
                self.position += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl rand_core::CryptoRng for ScriptedRng {}

    #[test]
    fn test_random_below_stays_in_range() {
        let mut rng = GeneralRng::new(OsRng);
        let limit = Integer::from(192);

        for _ in 0..500 {
            let value = rng.random_below(&limit).unwrap();
            assert!(value >= 0 && value < limit);
        }
    }

    #[test]
    fn test_random_below_one_is_zero() {
        let mut rng = GeneralRng::new(StdRng::seed_from_u64(7));

        assert_eq!(Integer::new(), rng.random_below(&Integer::from(1)).unwrap());
    }

    #[test]
    fn test_random_below_covers_small_range() {
        let mut rng = GeneralRng::new(StdRng::seed_from_u64(42));
        let mut seen = [false; 5];

        for _ in 0..1000 {
            let value = rng.random_below(&Integer::from(5)).unwrap();
            seen[value.to_usize().unwrap()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_below_large_limit() {
        let mut rng = GeneralRng::new(OsRng);
        let limit = Integer::from(Integer::u_pow_u(2, 1023)) + 12345;

        let value = rng.random_below(&limit).unwrap();
        assert!(value < limit);
    }

    #[test]
    fn test_random_below_rejects_until_in_range() {
        // 0xff masks to 127 and 0xc7 to 71, both too large for a limit of 71.
        let mut rng = GeneralRng::new(ScriptedRng {
            bytes: vec![0xff, 0xc7, 0x05],
            position: 0,
        });

        assert_eq!(Integer::from(5), rng.random_below(&Integer::from(71)).unwrap());
        assert_eq!(3, rng.rng().position);
    }

    #[test]
    fn test_random_below_zero_is_empty() {
        let mut rng = GeneralRng::new(OsRng);

        assert!(matches!(
            rng.random_below(&Integer::new()),
            Err(RandomnessError::EmptyRange)
        ));
    }

    #[test]
    fn test_failing_source_propagates() {
        let mut rng = GeneralRng::new(BrokenRng);

        assert!(matches!(
            rng.random_below(&Integer::from(71)),
            Err(RandomnessError::Source(_))
        ));
    }
}
