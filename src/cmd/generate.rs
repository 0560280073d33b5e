use clap::{command, ArgMatches, Command};

use super::CommandType;
use crate::keys::generate_key;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Generate.as_str()).about("Generate a random hex secret key")
}

pub fn run_generate<W>(_generate_args: &ArgMatches, writer: &mut W)
where
    W: OutErr,
{
    let new_secret_key = generate_key();
    writer.write(&format!("{}\n", new_secret_key));
}
