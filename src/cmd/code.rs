use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::error::StoreError;
use crate::keys::{decode_key, is_hex_key};
use crate::secret::SecretStoreOperations;
use crate::totp::{generate_code, GetTime};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Code.as_str())
        .about("Print the current one-time code")
        .args(&[
            arg!(-a --account <NAME> "Account name to look up in the secret store")
                .required(false),
            arg!(-k --key <KEY> "Hex-encoded shared key, bypassing the store")
                .required(false)
                .validator(is_hex_key),
        ])
}

pub fn run_code<W>(
    code_args: &ArgMatches,
    store: &impl SecretStoreOperations,
    writer: &mut W,
    clock: &impl GetTime,
) where
    W: OutErr,
{
    let key_hex = match (code_args.value_of("key"), code_args.value_of("account")) {
        (Some(key_hex), _) => key_hex.to_string(),
        (None, Some(account_name)) => match store.get(account_name) {
            Some(secret) => secret.key.clone(),
            None => {
                let err = StoreError::SecretNotFound(account_name.to_string());
                writer.write_err(&format!("{}\n", err));
                return;
            }
        },
        (None, None) => {
            writer.write_err("An account name or a key is required\n");
            return;
        }
    };

    let key = match decode_key(&key_hex) {
        Ok(key) => key,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    match generate_code(&key, clock.get_now()) {
        Ok(code) => writer.write(&format!("{}\n", code)),
        Err(err) => writer.write_err(&format!("{}\n", err)),
    }
}
