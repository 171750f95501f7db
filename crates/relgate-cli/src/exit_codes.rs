//! Unified exit codes for the release gate.
//! These codes are part of the public contract consumed by CI pipelines.

pub const VALID: i32 = 0;
pub const FORMAT_ERROR: i32 = 1; // Version schemes incompatible, or a version/config failed to parse
pub const NOT_VALID: i32 = 2; // Release is not accepted against the current version
