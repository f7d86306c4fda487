use std::fs;

use tor_keys::{
    TorKeys,
    cli::{AddressArgs, CliArgs, CliCommands, GenerateArgs, GenerateArgsFormat, VerifyArgs, parse},
    tor::{
        ExpandedSecretKey, HiddenServicePublicKey, HiddenServiceSecretKey, OnionAddress, PublicKey,
    },
};
use tracing_subscriber::EnvFilter;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = &parse();

    let output = match &cli.command {
        CliCommands::Address(address) => address_derive(cli, address)?,
        CliCommands::Generate(generate) => keys_generate(cli, generate)?,
        CliCommands::Verify(verify) => address_verify(cli, verify)?,
    };

    println!("{output}");

    Ok(())
}

fn address_derive(_cli: &CliArgs, args: &AddressArgs) -> Result<String, Error> {
    let public_key = if let Some(public_key) = &args.public_key {
        PublicKey::from_base64(public_key)?
    } else if let Some(path) = &args.hs_public_key_file {
        tracing::debug!(path =? path, "reading public key");
        PublicKey::from(&HiddenServicePublicKey::try_from(&fs::read(path)?)?)
    } else if let Some(path) = &args.hs_secret_key_file {
        tracing::debug!(path =? path, "reading secret key");
        let secret_key = HiddenServiceSecretKey::try_from(&fs::read(path)?)?;
        PublicKey::from(&ExpandedSecretKey::from(&secret_key))
    } else {
        return Err(
            "one of --public-key, --hs-public-key-file or --hs-secret-key-file is required".into(),
        );
    };

    Ok(OnionAddress::from(&public_key).into())
}

fn keys_generate(_cli: &CliArgs, args: &GenerateArgs) -> Result<String, Error> {
    let tor_keys = TorKeys::generate()?;

    let content = match args.format {
        GenerateArgsFormat::Json => serde_json::to_string_pretty(&tor_keys)?,
        GenerateArgsFormat::Yaml => serde_yaml::to_string(&tor_keys)?,
    };

    Ok(content.trim_end().to_string())
}

fn address_verify(_cli: &CliArgs, args: &VerifyArgs) -> Result<String, Error> {
    let address: OnionAddress = args.address.trim().parse()?;
    tracing::debug!(address =% address, "verified");

    Ok(address.public_key().to_base64())
}
