pub mod config;
pub mod errors;
pub mod gate;
pub mod version;

pub use config::{load_config, Config};
pub use errors::{ConfigError, GateError, ParseError};
pub use gate::{is_acceptable, Verdict};
pub use version::Version;
