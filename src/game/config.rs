//! Per-session rule configuration

use std::time::Duration;
use thiserror::Error;

/// Rules handed to each new session
///
/// Replaces process-wide settings: every session receives its own copy, so
/// changing settings mid-game never affects a session already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub hints: u32,
    pub time_limit: Option<Duration>,
}

/// Error type for invalid rule values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Maximum attempts must be at least 1")]
    ZeroAttempts,
}

impl GameConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
    pub const DEFAULT_HINTS: u32 = 2;
    /// Time box used by challenge mode
    pub const CHALLENGE_TIME_LIMIT: Duration = Duration::from_secs(60);

    /// Create an untimed configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is 0.
    pub const fn new(max_attempts: u32, hints: u32) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts,
            hints,
            time_limit: None,
        })
    }

    /// Same rules with a time box
    #[must_use]
    pub const fn with_time_limit(self, limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
            ..self
        }
    }

    /// Same rules without a time box
    #[must_use]
    pub const fn untimed(self) -> Self {
        Self {
            time_limit: None,
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            hints: Self::DEFAULT_HINTS,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.hints, 2);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert_eq!(GameConfig::new(0, 3), Err(ConfigError::ZeroAttempts));
        assert!(GameConfig::new(1, 0).is_ok());
    }

    #[test]
    fn time_limit_toggles() {
        let timed = GameConfig::default().with_time_limit(GameConfig::CHALLENGE_TIME_LIMIT);
        assert_eq!(timed.time_limit, Some(Duration::from_secs(60)));
        assert_eq!(timed.untimed().time_limit, None);
        assert_eq!(timed.max_attempts, 6);
    }
}
