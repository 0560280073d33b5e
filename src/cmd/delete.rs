use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::secret::SecretStoreOperations;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Delete.as_str())
        .about("Delete an account")
        .args(&[arg!(-a --account <NAME> "Account name to delete").required(true)])
}

pub fn run_delete<W>(
    delete_args: &ArgMatches,
    mut store: impl SecretStoreOperations,
    writer: &mut W,
) where
    W: OutErr,
{
    let account_name = match delete_args.value_of("account") {
        Some(account_name) => account_name,
        _ => {
            writer.write_err("Account name is required\n");
            return;
        }
    };

    match store.delete(account_name) {
        Some(_) => match store.save() {
            Ok(_) => writer.write("Account successfully deleted\n"),
            Err(err) => writer.write_err(&format!("{}\n", err)),
        },
        None => writer.write_err(&format!("Account not found: {}\n", account_name)),
    }
}
