use std::error::Error;

use clap::{Parser, Subcommand};
use pixveil_core::{BitDepth, CodecOptions, PixveilError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Bits of every color channel that carry the secret image (1-7).
    /// More bits reveal the secret image better but are easier to spot.
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=7)
    )]
    pub bits: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        Ok(CodecOptions::new(BitDepth::try_from(self.bits)?))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}

/// Interactively asks for a password, an empty answer means no password.
/// Fails when no terminal is available.
pub fn ask_for_password(confirm: bool) -> CliResult<Option<String>> {
    let mut prompt = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    let password = prompt.interact().map_err(password_prompt_error)?;

    Ok(Some(password).filter(|p| !p.is_empty()))
}

fn password_prompt_error(e: dialoguer::Error) -> PixveilError {
    match e {
        dialoguer::Error::IO(source) => PixveilError::ReadError { source },
    }
}

/// Renders an error with all of its causes on one line
pub fn error_chain(e: &dyn Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
