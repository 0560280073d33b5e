use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::keys::is_hex_key;
use crate::secret::{Secret, SecretStoreOperations};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Add.as_str())
        .about("Add an account")
        .args(&[
            arg!(-a --account <NAME> "Account name to create").required(true),
            arg!(-k --key <KEY> "Hex-encoded shared key")
                .required(true)
                .validator(is_hex_key),
        ])
}

pub fn run_add<W>(add_args: &ArgMatches, mut store: impl SecretStoreOperations, writer: &mut W)
where
    W: OutErr,
{
    let (account_name, key) = match (add_args.value_of("account"), add_args.value_of("key")) {
        (Some(account_name), Some(key)) => (account_name, key),
        _ => {
            writer.write_err("Account name and key are required\n");
            return;
        }
    };

    if store.get(account_name).is_some() {
        writer.write_err("Account already exists\n");
        return;
    }

    store.add(account_name.to_string(), Secret::new(String::from(key)));

    match store.save() {
        Ok(_) => writer.write(&format!(
            "Account \"{}\" successfully created\n",
            account_name
        )),
        Err(err) => writer.write_err(&format!("{}\n", err)),
    }
}
