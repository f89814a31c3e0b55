//! Phase duration configuration

use serde::{Deserialize, Serialize};

use crate::error::{FocusError, Result};

pub const DEFAULT_FOCUS_SECONDS: u64 = 25 * 60;
pub const DEFAULT_BREAK_SECONDS: u64 = 5 * 60;

/// Durations of the two phases of a session cycle.
///
/// Both durations are guaranteed positive; the only way to build a config is
/// through [`SessionConfig::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    focus_duration_seconds: u64,
    break_duration_seconds: u64,
}

impl SessionConfig {
    /// Create a config, rejecting zero durations
    pub fn new(focus_duration_seconds: u64, break_duration_seconds: u64) -> Result<Self> {
        if focus_duration_seconds == 0 {
            return Err(FocusError::InvalidDuration {
                field: "focus_duration_seconds",
                value: focus_duration_seconds,
            });
        }
        if break_duration_seconds == 0 {
            return Err(FocusError::InvalidDuration {
                field: "break_duration_seconds",
                value: break_duration_seconds,
            });
        }

        Ok(Self {
            focus_duration_seconds,
            break_duration_seconds,
        })
    }

    /// Create a config from whole minutes, rejecting values that overflow
    /// when converted to seconds
    pub fn from_minutes(focus_minutes: u64, break_minutes: u64) -> Result<Self> {
        let focus = minutes_to_seconds("focus_minutes", focus_minutes)?;
        let brk = minutes_to_seconds("break_minutes", break_minutes)?;
        Self::new(focus, brk)
    }

    pub fn focus_duration_seconds(&self) -> u64 {
        self.focus_duration_seconds
    }

    pub fn break_duration_seconds(&self) -> u64 {
        self.break_duration_seconds
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_duration_seconds: DEFAULT_FOCUS_SECONDS,
            break_duration_seconds: DEFAULT_BREAK_SECONDS,
        }
    }
}

fn minutes_to_seconds(field: &'static str, minutes: u64) -> Result<u64> {
    minutes
        .checked_mul(60)
        .ok_or(FocusError::InvalidDuration { field, value: minutes })
}

/// Raw form used when a config arrives over the wire; validated on conversion
#[derive(Debug, Deserialize)]
struct RawSessionConfig {
    focus_duration_seconds: u64,
    break_duration_seconds: u64,
}

impl<'de> Deserialize<'de> for SessionConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawSessionConfig::deserialize(deserializer)?;
        SessionConfig::new(raw.focus_duration_seconds, raw.break_duration_seconds)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_is_twenty_five_and_five_minutes() {
        let config = SessionConfig::default();
        assert_eq!(config.focus_duration_seconds(), 1500);
        assert_eq!(config.break_duration_seconds(), 300);
    }

    #[test]
    fn zero_durations_are_rejected() {
        assert_matches!(
            SessionConfig::new(0, 300),
            Err(FocusError::InvalidDuration { field: "focus_duration_seconds", value: 0 })
        );
        assert_matches!(
            SessionConfig::new(1500, 0),
            Err(FocusError::InvalidDuration { field: "break_duration_seconds", .. })
        );
    }

    #[test]
    fn minutes_are_converted_to_seconds() {
        let config = SessionConfig::from_minutes(50, 10).unwrap();
        assert_eq!(config.focus_duration_seconds(), 3000);
        assert_eq!(config.break_duration_seconds(), 600);
    }

    #[test]
    fn overflowing_minutes_are_rejected() {
        assert_matches!(
            SessionConfig::from_minutes(u64::MAX, 1),
            Err(FocusError::InvalidDuration { field: "focus_minutes", value: u64::MAX })
        );
        assert_matches!(
            SessionConfig::from_minutes(25, u64::MAX / 60 + 1),
            Err(FocusError::InvalidDuration { field: "break_minutes", .. })
        );
        assert!(SessionConfig::from_minutes(u64::MAX / 60, 1).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: SessionConfig =
            serde_json::from_str(r#"{"focus_duration_seconds":60,"break_duration_seconds":30}"#)
                .unwrap();
        assert_eq!(ok, SessionConfig::new(60, 30).unwrap());

        let bad = serde_json::from_str::<SessionConfig>(
            r#"{"focus_duration_seconds":0,"break_duration_seconds":30}"#,
        );
        assert!(bad.is_err());
    }
}
