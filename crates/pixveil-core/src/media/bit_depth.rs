use std::fmt::{self, Display, Formatter};

use crate::error::PixveilError;

/// Number of low bits of every cover color channel that carry the secret image.
///
/// Larger values reveal the secret image with more fidelity but distort the cover more visibly.
/// The cover keeps `8 - n` bits, the secret image contributes its top `n` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// The number of bits taken from the secret image
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The number of bits the cover image keeps
    pub const fn cover_bits(self) -> u8 {
        8 - self.0
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = PixveilError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(PixveilError::InvalidParameter(bits))
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.0
    }
}

impl Display for BitDepth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
