use super::super::args::{Cli, Command};
use crate::exit_codes;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Check(args) => super::check::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::VALID)
        }
    }
}
