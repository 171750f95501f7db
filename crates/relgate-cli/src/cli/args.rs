use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "relgate",
    version,
    about = "Release gate for CI — checks a proposed release version against the project config"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether a proposed release version passes the gate
    Check(CheckArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Proposed release version, e.g. 1.12.3
    pub release: String,

    /// Project config file holding the currently recorded version
    #[arg(long, default_value = relgate_core::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn check_takes_positional_release_version() {
        let cli = Cli::parse_from(["relgate", "check", "1.2.3"]);
        match cli.cmd {
            Command::Check(args) => {
                assert_eq!(args.release, "1.2.3");
                assert_eq!(args.config, PathBuf::from("Config.json"));
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn check_accepts_config_override() {
        let cli = Cli::parse_from(["relgate", "check", "2.0.0", "--config", "proj/Config.json"]);
        match cli.cmd {
            Command::Check(args) => assert_eq!(args.config, PathBuf::from("proj/Config.json")),
            _ => panic!("expected check subcommand"),
        }
    }
}
