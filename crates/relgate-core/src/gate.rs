//! The gate decision: is a proposed release acceptable against the version
//! currently recorded in the project config?

use crate::errors::GateError;
use crate::version::Version;
use tracing::debug;

/// Outcome of comparing a release version against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Acceptable,
    NotAcceptable,
}

/// Compares `release` against `current` component-wise, most significant
/// component first.
///
/// Both versions must have the same number of components; a mismatch is a
/// [`GateError::FormatMismatch`], a scheme incompatibility distinct from a
/// `NotAcceptable` verdict. Components are never padded or truncated.
///
/// The branch mapping is part of the frozen exit-status contract: at the
/// first differing index, `current > release` yields `Acceptable` and
/// `current < release` yields `NotAcceptable`; fully equal versions are
/// `NotAcceptable`. Flagged in DESIGN.md; do not invert without
/// product-owner sign-off.
pub fn is_acceptable(release: &Version, current: &Version) -> Result<Verdict, GateError> {
    if release.len() != current.len() {
        return Err(GateError::FormatMismatch {
            release: release.len(),
            current: current.len(),
        });
    }

    for (r, c) in release.components().iter().zip(current.components()) {
        if c > r {
            debug!(%release, %current, "first divergence favors current");
            return Ok(Verdict::Acceptable);
        }
        if c < r {
            debug!(%release, %current, "first divergence favors release");
            return Ok(Verdict::NotAcceptable);
        }
    }

    // Equal versions: a release identical to current is not a new release.
    Ok(Verdict::NotAcceptable)
}
