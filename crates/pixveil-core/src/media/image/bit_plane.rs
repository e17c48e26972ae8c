//! Bit-plane codec, hides the top bits of a secret image in the low bits of a cover image.
//!
//! For a bit depth `n` every output channel keeps the top `8 - n` bits of the cover
//! and carries the top `n` bits of the secret image in its low `n` bits.
//! Unveiling shifts those low bits back to the top, the remaining bits come back as zero.

use log::debug;

use super::grid::{crop_to_common_size, RgbImage};
use crate::api::Password;
use crate::error::PixveilError;
use crate::media::bit_depth::BitDepth;
use crate::media::codec_options::CodecOptions;
use crate::permutation::{scramble, unscramble};
use crate::result::Result;

/// Combines one cover channel with one secret channel.
#[inline]
pub const fn conceal(cover: u8, hidden: u8, depth: BitDepth) -> u8 {
    let n = depth.bits();
    (cover & (0xFF << n)) | (hidden >> (8 - n))
}

/// Extracts the secret bits of one channel and moves them back to the top.
#[inline]
pub const fn reveal(value: u8, depth: BitDepth) -> u8 {
    let n = depth.bits();
    (value & ((1 << n) - 1)) << (8 - n)
}

/// Hides `hidden` inside `cover`.
///
/// Both images are cropped to their common size first. With a password the secret
/// channels are scrambled before they are combined. The result must be stored in a
/// lossless format, otherwise the low bits are gone.
pub fn encode(
    cover: &RgbImage,
    hidden: &RgbImage,
    options: &CodecOptions,
    password: &Password,
) -> Result<RgbImage> {
    let (mut combined, hidden) = crop_to_common_size(cover, hidden);
    let (width, height) = combined.dimensions();
    if width == 0 || height == 0 {
        return Err(PixveilError::DegenerateCrop { width, height });
    }

    let depth = options.bit_depth;
    debug!("encoding {width}x{height} with {depth} bits, {password:?}");

    let hidden = scramble(hidden.as_raw(), password);
    for (c, &h) in combined.iter_mut().zip(hidden.iter()) {
        *c = conceal(*c, h, depth);
    }

    Ok(combined)
}

/// Reveals the secret image from `encoded`.
///
/// Only the top `n` bits of the original secret channels are recoverable.
/// A wrong bit depth or password is not detectable, the result is just noise then.
pub fn decode(encoded: &RgbImage, options: &CodecOptions, password: &Password) -> RgbImage {
    let depth = options.bit_depth;
    debug!(
        "decoding {}x{} with {depth} bits, {password:?}",
        encoded.width(),
        encoded.height()
    );

    let mut revealed = encoded.clone();
    for v in revealed.iter_mut() {
        *v = reveal(*v, depth);
    }

    if password.as_ref().is_some() {
        let restored = unscramble(revealed.as_raw(), password);
        revealed.copy_from_slice(&restored);
    }

    revealed
}
