use std::path::PathBuf;

use clap::Args;
use pixveil_core::CodecOptions;

use crate::CliResult;

/// Hides a secret image inside a cover image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to scramble the secret image
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password interactively
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// Cover image that will be seen, PNG or JPEG, used readonly.
    #[arg(short = 'c', long = "cover", value_name = "cover image", required = true)]
    pub cover: PathBuf,

    /// Secret image that will be hidden, PNG or JPEG, used readonly.
    #[arg(short = 's', long = "secret", value_name = "secret image", required = true)]
    pub secret_image: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.ask_password {
            crate::cli::ask_for_password(true)?
        } else {
            self.password
        };

        pixveil_core::commands::hide(
            &self.cover,
            &self.secret_image,
            &self.write_to_file,
            password,
            options,
        )
    }
}
