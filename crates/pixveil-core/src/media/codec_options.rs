use super::bit_depth::BitDepth;

/// Codec configuration for hiding and unveiling
///
/// The very same options must be used for both directions,
/// there is no header inside the image that would carry them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// How many low bits of each color channel carry the secret image
    pub bit_depth: BitDepth,
}

impl CodecOptions {
    pub fn new(bit_depth: BitDepth) -> Self {
        Self { bit_depth }
    }

    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }
}
