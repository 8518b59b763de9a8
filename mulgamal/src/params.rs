//! Domain parameters $(g, p)$ of the multiplicative group that keys live in.
//!
//! Parameters are never generated here. They are either supplied by the caller or taken from a
//! published group such as [`DomainParameters::rfc5114_1024`].

use crate::error::{Error, Result};
use crate::keys::PublicKey;
use rug::Integer;

/// Prime modulus of the 1024-bit MODP group with 160-bit prime order subgroup from RFC 5114,
/// section 2.1.
pub const RFC5114_1024_PRIME: &str = "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D\
    23B616073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BFACC\
    BDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0A151AF5F0DC\
    8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371";

/// Generator of the RFC 5114, section 2.1 group.
pub const RFC5114_1024_GENERATOR: &str = "A4D1CBD5C3FD34126765A442EFB99905F8104DD258AC507FD6406CF\
    F14266D31266FEA1E5C41564B777E690F5504F213160217B4B01B886A5E91547F9E2749F\
    4D7FBD7D3B9A92EE1909D0D2263F80A76A6A24C087A091F531DBF0A0169B6A28AD662A4D\
    18E73AFA32D779D5918D08BC8858F4DCEF97C2A24855E6EEB22B3B2E5";

/// A generator `g` and prime modulus `p`. The primality of `p` and the order of `g` are the
/// caller's responsibility.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DomainParameters {
    pub(crate) g: Integer,
    pub(crate) p: Integer,
}

impl DomainParameters {
    /// Creates domain parameters after checking that $1 < p$ and $0 < g < p$.
    pub fn new(g: Integer, p: Integer) -> Result<Self> {
        if p <= 1 {
            return Err(Error::InvalidKey("p must be greater than 1"));
        }
        if g <= 0 || g >= p {
            return Err(Error::InvalidKey("g must lie in (0, p)"));
        }

        Ok(DomainParameters { g, p })
    }

    /// The 1024-bit group from RFC 5114, section 2.1.
    /// ```
    /// # use mulgamal::params::DomainParameters;
    /// let params = DomainParameters::rfc5114_1024();
    /// assert_eq!(1024, params.p().significant_bits());
    /// ```
    pub fn rfc5114_1024() -> Self {
        DomainParameters {
            g: parse_constant(RFC5114_1024_GENERATOR),
            p: parse_constant(RFC5114_1024_PRIME),
        }
    }

    /// The generator.
    pub fn g(&self) -> &Integer {
        &self.g
    }

    /// The prime modulus.
    pub fn p(&self) -> &Integer {
        &self.p
    }

    /// Builds the public key with public value `y` over this group.
    pub fn public_key(&self, y: Integer) -> Result<PublicKey> {
        PublicKey::new(self.g.clone(), self.p.clone(), y)
    }
}

fn parse_constant(hex: &str) -> Integer {
    // The constants above are well-formed, so every digit parses.
    hex.bytes()
        .filter_map(|b| (b as char).to_digit(16))
        .fold(Integer::new(), |acc, digit| (acc << 4) + digit)
}
