//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity, least to most severe.
///
/// Comparison is by underlying integer rank; an event at severity `S` is
/// eligible for a binding with threshold `T` iff `S >= T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Finest = 0,
    Fine = 1,
    Debug = 2,
    Trace = 3,
    Info = 4,
    Warning = 5,
    Error = 6,
    Critical = 7,
}

impl Severity {
    /// All levels, least to most severe.
    pub const ALL: [Severity; 8] = [
        Severity::Finest,
        Severity::Fine,
        Severity::Debug,
        Severity::Trace,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// The fixed four-character code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Finest => "FNST",
            Severity::Fine => "FINE",
            Severity::Debug => "DEBG",
            Severity::Trace => "TRAC",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "EROR",
            Severity::Critical => "CRIT",
        }
    }

    /// Whether an event at `severity` clears this threshold.
    #[inline]
    pub fn admits(&self, severity: Severity) -> bool {
        severity >= *self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FNST" | "FINEST" => Ok(Severity::Finest),
            "FINE" => Ok(Severity::Fine),
            "DEBG" | "DEBUG" => Ok(Severity::Debug),
            "TRAC" | "TRACE" => Ok(Severity::Trace),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "EROR" | "ERROR" => Ok(Severity::Error),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_four_chars() {
        for level in Severity::ALL {
            assert_eq!(level.code().len(), 4, "{:?}", level);
        }
    }

    #[test]
    fn test_ordering_matches_rank() {
        for (i, a) in Severity::ALL.iter().enumerate() {
            for (j, b) in Severity::ALL.iter().enumerate() {
                assert_eq!(a < b, i < j);
                assert_eq!(a.admits(*b), j >= i);
            }
        }
    }

    #[test]
    fn test_admits_is_inclusive() {
        assert!(Severity::Info.admits(Severity::Info));
        assert!(Severity::Info.admits(Severity::Critical));
        assert!(!Severity::Info.admits(Severity::Debug));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("EROR".parse::<Severity>().unwrap(), Severity::Error);
        assert!("VERBOSE".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(format!("{}", Severity::Critical), "CRIT");
        assert_eq!(format!("{}", Severity::Finest), "FNST");
    }

    #[test]
    fn test_default_is_lowest() {
        assert_eq!(Severity::default(), Severity::Finest);
    }
}
