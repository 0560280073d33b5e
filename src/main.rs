use clap::Command;

mod cmd;
mod error;
mod keys;
mod secret;
mod totp;
mod writer;


use crate::secret::SecretStore;
use crate::totp::Clock;
use crate::writer::{OutErr, TotpWriter};

fn main() {
    let matches = Command::new("totp")
        .about("Time-based one-time password generator (RFC 6238)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands([
            cmd::code::subcommand(),
            cmd::add::subcommand(),
            cmd::delete::subcommand(),
            cmd::list::subcommand(),
            cmd::generate::subcommand(),
        ])
        .get_matches();

    let mut writer = TotpWriter::new();

    let store = match SecretStore::load() {
        Ok(store) => store,
        Err(err) => {
            writer.write_err(&format!("Unable to open the secret store: {}\n", err));
            std::process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("code", code_args)) => {
            cmd::code::run_code(code_args, &store, &mut writer, &Clock::new())
        }
        Some(("add", add_args)) => cmd::add::run_add(add_args, store, &mut writer),
        Some(("delete", delete_args)) => cmd::delete::run_delete(delete_args, store, &mut writer),
        Some(("list", _)) => cmd::list::run_list(&store, &mut writer),
        Some(("generate", generate_args)) => cmd::generate::run_generate(generate_args, &mut writer),
        _ => unreachable!("subcommand is required"),
    }
}
