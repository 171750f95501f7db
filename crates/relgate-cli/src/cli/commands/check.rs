use relgate_core::config::load_config;
use relgate_core::errors::GateError;
use relgate_core::gate::{is_acceptable, Verdict};
use relgate_core::version::Version;

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::exit_codes;

pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    debug!(release = %args.release, config = %args.config.display(), "running release gate");

    // 1. Load Config
    let cfg = load_config(&args.config)?;

    // 2. Parse both versions
    let release: Version = args.release.parse()?;
    let current: Version = cfg.version.parse()?;

    // 3. Decide and map to the exit contract
    let code = match is_acceptable(&release, &current) {
        Ok(Verdict::Acceptable) => {
            println!("✅ Valid");
            exit_codes::VALID
        }
        Ok(Verdict::NotAcceptable) => {
            println!("❌ Not valid");
            exit_codes::NOT_VALID
        }
        Err(GateError::FormatMismatch { .. }) => {
            eprintln!("❌ Version formats do not match!");
            exit_codes::FORMAT_ERROR
        }
    };

    Ok(code)
}
