//! # Pixveil Core API
//!
//! Hides one image inside the least significant bits of another one.
//! The secret image can optionally be scrambled with a password before it is embedded.
//!
//! There are 2 main entry points exposed via [`api`]:
//! - [`api::hide`] for concealing a secret image in a cover image
//! - [`api::unveil`] for revealing a secret image from an image
//!
//! The pure in-memory transforms live in [`media::image::bit_plane`] and [`permutation`].
//!
//! # Usage Examples
//!
//! ## Hide an image inside another image
//!
//! ```rust,no_run
//! use pixveil_core::{BitDepth, CodecOptions};
//!
//! pixveil_core::api::hide::prepare()
//!     .with_cover("cover.png")
//!     .with_secret_image("secret.jpg")
//!     .with_options(CodecOptions::new(BitDepth::try_from(3)?))
//!     .with_password("SuperSecret42")
//!     .with_output("cover-with-secret.png")
//!     .execute()?;
//! # Ok::<(), pixveil_core::PixveilError>(())
//! ```
//!
//! ## Unveil the image again
//!
//! ```rust,no_run
//! use pixveil_core::{BitDepth, CodecOptions};
//!
//! pixveil_core::api::unveil::prepare()
//!     .from_secret_file("cover-with-secret.png")
//!     .with_options(CodecOptions::new(BitDepth::try_from(3)?))
//!     .using_password("SuperSecret42")
//!     .into_output_file("revealed.png")
//!     .execute()?;
//! # Ok::<(), pixveil_core::PixveilError>(())
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod permutation;
pub mod result;

pub use crate::api::Password;
pub use crate::error::PixveilError;
pub use crate::media::bit_depth::BitDepth;
pub use crate::media::codec_options::CodecOptions;
pub use crate::media::image::bit_plane::{decode, encode};
pub use crate::media::image::grid::{crop_to_common_size, load_image, save_image};
pub use crate::result::Result;
pub use image::RgbImage;
