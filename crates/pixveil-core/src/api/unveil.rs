use std::path::{Path, PathBuf};

use crate::media::image::bit_plane;
use crate::media::image::grid::{is_png_extension, load_image_file, save_image_file, RgbImage};
use crate::{CodecOptions, PixveilError};

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the secret image
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the revealed image will be saved to, must be a PNG file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password used for scrambling the secret image
    /// If `None` is passed, no password will be used, leads to no unscrambling
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), PixveilError> {
        let Some(output_file) = self.output_file.clone() else {
            return Err(PixveilError::TargetNotSet);
        };
        if !is_png_extension(&output_file) {
            return Err(PixveilError::UnsupportedOutputFormat(output_file));
        }

        let revealed = self.reveal()?;
        save_image_file(&revealed, &output_file)
    }

    /// Reveals the secret image without writing anything
    pub fn reveal(self) -> Result<RgbImage, PixveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixveilError::CarrierNotSet);
        };

        let image = load_image_file(&secret_media)?;

        Ok(bit_plane::decode(&image, &self.options, &self.password))
    }
}
