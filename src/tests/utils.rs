use clap::{ArgMatches, Command};

// Parse a full argv for one subcommand and hand back its matches.
pub fn get_cmd_args(
    command_str: &str,
    subcommand: Command,
    arg_vec: &Vec<&str>,
) -> Result<ArgMatches, clap::Error> {
    let matches = Command::new("totp")
        .subcommand(subcommand)
        .try_get_matches_from(arg_vec)?;

    match matches.subcommand() {
        Some((cmd, cmd_args)) if cmd == command_str => Ok(cmd_args.clone()),
        _ => panic!("Expected {} subcommand", command_str),
    }
}
