use std::path::PathBuf;

use clap::Args;
use pixveil_core::CodecOptions;

use crate::CliResult;

/// Unveils a secret image, bits and password must match the ones used for hiding
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to scramble the secret image
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password interactively
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// Source image that contains the secret image
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Revealed image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.ask_password {
            crate::cli::ask_for_password(false)?
        } else {
            self.password
        };

        pixveil_core::commands::unveil(&self.media, &self.output_file, password, options)
    }
}
