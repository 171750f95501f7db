use thiserror::Error;

/// A version string component could not be parsed as a non-negative integer.
#[derive(Debug, Error)]
#[error("invalid version component '{component}' in '{input}'")]
pub struct ParseError {
    pub input: String,
    pub component: String,
    #[source]
    pub source: std::num::ParseIntError,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    /// The two versions use different schemes (component counts differ).
    /// Terminal: never coerced by padding or truncation.
    #[error("version formats do not match: release has {release} components, current has {current}")]
    FormatMismatch { release: usize, current: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
