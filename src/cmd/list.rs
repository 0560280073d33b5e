use clap::{command, Command};

use super::CommandType;
use crate::secret::SecretStoreOperations;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::List.as_str()).about("List all accounts")
}

pub fn run_list<W>(store: &impl SecretStoreOperations, writer: &mut W)
where
    W: OutErr,
{
    writer.write("Accounts:\n");
    for account_name in store.list() {
        writer.write(&format!("{}\n", account_name));
    }
}
