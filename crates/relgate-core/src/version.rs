//! Dotted numeric version strings, parsed into comparable component sequences.

use crate::errors::ParseError;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of non-negative integers, most-significant component
/// first. Immutable once parsed; comparison shape rules live in [`crate::gate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(Vec<u64>);

impl Version {
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Splits on `.` and base-10 parses every group, preserving order.
    /// An empty or non-numeric group is a [`ParseError`]. No shape
    /// validation happens here; that is the gate's job at comparison time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|group| {
                group.parse::<u64>().map_err(|e| ParseError {
                    input: s.to_string(),
                    component: group.to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<u64>, ParseError>>()?;
        Ok(Version(components))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted = self
            .0
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_numeric_string() {
        let v: Version = "1.2.3".parse().unwrap();
        assert_eq!(v.components(), &[1, 2, 3]);
    }

    #[test]
    fn parses_multi_digit_and_zero_components() {
        let v: Version = "10.0.1".parse().unwrap();
        assert_eq!(v.components(), &[10, 0, 1]);
    }

    #[test]
    fn parses_single_component() {
        let v: Version = "42".parse().unwrap();
        assert_eq!(v.components(), &[42]);
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = "1.a.3".parse::<Version>().unwrap_err();
        assert_eq!(err.component, "a");
        assert_eq!(err.input, "1.a.3");
    }

    #[test]
    fn rejects_empty_component() {
        assert!("1..3".parse::<Version>().is_err());
        assert!("1.2.".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn rejects_embedded_whitespace() {
        assert!("1. 2.3".parse::<Version>().is_err());
    }

    #[test]
    fn rejects_negative_component() {
        assert!("1.-2.3".parse::<Version>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let v: Version = "1.12.3".parse().unwrap();
        assert_eq!(v.to_string(), "1.12.3");
    }
}
