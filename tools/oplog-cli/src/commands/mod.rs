//! CLI command implementations.

pub mod demo;
pub mod run;

use clap::Args;

/// Arguments for the reverse command.
#[derive(Args)]
pub struct ReverseArgs {
    /// Text to reverse.
    pub text: String,
}

/// Arguments for the upper command.
#[derive(Args)]
pub struct UpperArgs {
    /// Text to upper-case.
    pub text: String,
}

/// Arguments for the length command.
#[derive(Args)]
pub struct LengthArgs {
    /// Text to measure; omitted text counts as zero.
    pub text: Option<String>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// First operand.
    #[arg(allow_hyphen_values = true)]
    pub a: i64,

    /// Second operand.
    #[arg(allow_hyphen_values = true)]
    pub b: i64,
}

/// Arguments for the divide command.
#[derive(Args)]
pub struct DivideArgs {
    /// Dividend.
    #[arg(allow_hyphen_values = true)]
    pub a: f64,

    /// Divisor.
    #[arg(allow_hyphen_values = true)]
    pub b: f64,
}
