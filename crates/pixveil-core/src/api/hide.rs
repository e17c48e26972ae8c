use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::bit_plane;
use crate::media::image::grid::{is_png_extension, load_image_file, save_image_file, RgbImage};
use crate::{CodecOptions, PixveilError};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    cover: Option<PathBuf>,
    secret_image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that will be seen
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    /// This is the image that will be hidden inside the cover
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The resulting image, must be a PNG file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no scrambling
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Hides the secret image and writes the result to the output file
    pub fn execute(self) -> Result<(), PixveilError> {
        let Some(output) = self.output.clone() else {
            return Err(PixveilError::TargetNotSet);
        };
        if !is_png_extension(&output) {
            return Err(PixveilError::UnsupportedOutputFormat(output));
        }
        let bits = self.options.bit_depth;

        let combined = self.execute_in_memory()?;
        save_image_file(&combined, &output)?;
        info!(
            "secret image uses {} bits, cover keeps {} bits, written to {output:?}",
            bits.bits(),
            bits.cover_bits()
        );

        Ok(())
    }

    /// Hides the secret image and returns the combined image without writing anything
    pub fn execute_in_memory(self) -> Result<RgbImage, PixveilError> {
        let Some(cover) = self.cover else {
            return Err(PixveilError::CarrierNotSet);
        };
        let Some(secret_image) = self.secret_image else {
            return Err(PixveilError::SecretImageNotSet);
        };

        let cover = load_image_file(&cover)?;
        let secret_image = load_image_file(&secret_image)?;

        bit_plane::encode(&cover, &secret_image, &self.options, &self.password)
    }
}
