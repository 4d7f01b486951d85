use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest level a machine default can take (no additive at all).
pub const MIN_LEVEL: u8 = 0;
/// Highest level a machine default can take (4 spoons/drops).
pub const MAX_LEVEL: u8 = 4;

/// The two additive knobs a machine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Additive {
    Sugar,
    Milk,
}

impl fmt::Display for Additive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sugar => write!(f, "sugar"),
            Self::Milk => write!(f, "milk"),
        }
    }
}

/// How out-of-range default levels are handled, fixed at machine
/// construction.
///
/// `Strict` refuses values outside `[MIN_LEVEL, MAX_LEVEL]` with
/// [`MachineError::OutOfRange`]; `Silenced` clamps them to the nearest bound
/// without reporting anything. Only default-setting goes through this policy;
/// additive accumulation on an issued drink does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelPolicy {
    #[default]
    Strict,
    Silenced,
}

impl LevelPolicy {
    /// Validates a requested default level for `additive`, returning the
    /// level to store.
    pub fn validate(&self, additive: Additive, value: i64) -> Result<u8> {
        let min = i64::from(MIN_LEVEL);
        let max = i64::from(MAX_LEVEL);
        match self {
            Self::Strict => {
                if value < min || value > max {
                    Err(MachineError::OutOfRange(additive))
                } else {
                    Ok(value as u8)
                }
            }
            Self::Silenced => Ok(value.clamp(min, max) as u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_range() {
        for value in 0..=4 {
            assert_eq!(
                LevelPolicy::Strict.validate(Additive::Sugar, value),
                Ok(value as u8)
            );
        }
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        assert_eq!(
            LevelPolicy::Strict.validate(Additive::Sugar, 5),
            Err(MachineError::OutOfRange(Additive::Sugar))
        );
        assert_eq!(
            LevelPolicy::Strict.validate(Additive::Milk, -1),
            Err(MachineError::OutOfRange(Additive::Milk))
        );
    }

    #[test]
    fn test_silenced_clamps() {
        assert_eq!(LevelPolicy::Silenced.validate(Additive::Sugar, 55), Ok(4));
        assert_eq!(LevelPolicy::Silenced.validate(Additive::Milk, -7), Ok(0));
        assert_eq!(LevelPolicy::Silenced.validate(Additive::Milk, 3), Ok(3));
    }

    #[test]
    fn test_out_of_range_message_names_the_additive() {
        let err = LevelPolicy::Strict
            .validate(Additive::Milk, 9)
            .unwrap_err();
        assert_eq!(err.to_string(), "Wrong value for milk.");
    }
}
