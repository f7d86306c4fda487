use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/*
 * ============================================================================
 * Cli
 * ============================================================================
 */
#[allow(clippy::module_name_repetitions)]
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommands,
}

#[must_use]
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[allow(clippy::module_name_repetitions)]
#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Derive the onion address of an existing public key
    Address(AddressArgs),

    /// Generate a new key pair and its onion address
    Generate(GenerateArgs),

    /// Verify an onion address and print its public key
    Verify(VerifyArgs),
}

/*
 * ============================================================================
 * Address
 * ============================================================================
 */
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct AddressArgs {
    /// Base64 encoded Ed25519 public key.
    #[arg(long)]
    pub public_key: Option<String>,

    /// Path to a Tor `hs_ed25519_public_key` file.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub hs_public_key_file: Option<PathBuf>,

    /// Path to a Tor `hs_ed25519_secret_key` file.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub hs_secret_key_file: Option<PathBuf>,
}

/*
 * ============================================================================
 * Generate
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, env = "TOR_KEYS_FORMAT", value_enum, default_value_t = GenerateArgsFormat::Json)]
    pub format: GenerateArgsFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateArgsFormat {
    Json,
    Yaml,
}

/*
 * ============================================================================
 * Verify
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Onion address, e.g. `<56 characters>.onion`.
    pub address: String,
}
