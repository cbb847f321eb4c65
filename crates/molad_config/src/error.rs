//! Error types for configuration loading.

use std::path::PathBuf;

use molad_calendar::CalendarError;
use molad_time::MoladError;

/// Errors from reading, parsing or validating a molad configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML text is malformed or has unknown keys.
    #[error("failed to parse TOML config")]
    Parse(#[from] toml::de::Error),

    /// A month or weekday name/index does not resolve.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The seed fields do not form a valid molad.
    #[error("invalid seed molad")]
    Molad(#[from] MoladError),

    /// The target month index cannot occur in any year.
    #[error("invalid target month index {month} (must be 0..13)")]
    InvalidTarget { month: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_target() {
        let e = ConfigError::InvalidTarget { month: 14 };
        assert_eq!(e.to_string(), "invalid target month index 14 (must be 0..13)");
    }

    #[test]
    fn molad_error_is_source() {
        use std::error::Error;
        let e = ConfigError::from(MoladError::InvalidHour { hour: 25 });
        assert_eq!(e.to_string(), "invalid seed molad");
        assert!(e.source().is_some());
    }

    #[test]
    fn calendar_error_is_transparent() {
        let e = ConfigError::from(CalendarError::InvalidWeekdayIndex { index: 8 });
        assert_eq!(e.to_string(), "invalid weekday index 8 (must be 0..7)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ConfigError>();
    }
}
