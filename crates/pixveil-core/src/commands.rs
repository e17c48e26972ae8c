use std::path::Path;

use crate::{CodecOptions, PixveilError};

pub fn hide(
    cover: &Path,
    secret_image: &Path,
    write_to_file: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), PixveilError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_cover(cover)
        .with_secret_image(secret_image)
        .with_output(write_to_file)
        .use_password(password)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    destination_file: &Path,
    password: Option<String>,
    options: CodecOptions,
) -> Result<(), PixveilError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output_file(destination_file)
        .using_password(password)
        .execute()
}
