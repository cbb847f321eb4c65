//! Error types for molad construction.

/// Errors from building a [`LunarInstant`](crate::LunarInstant) out of raw fields.
///
/// These only guard the seed; advancing reports the one overflow case through
/// `checked_advance_one_month`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MoladError {
    /// Hour outside 0..24.
    #[error("invalid hour: {hour} (must be 0..24)")]
    InvalidHour { hour: u8 },

    /// Minute outside 0..60.
    #[error("invalid minute: {minute} (must be 0..60)")]
    InvalidMinute { minute: u8 },

    /// Chalakim outside 0..18.
    #[error("invalid chalakim: {chalakim} (must be 0..18)")]
    InvalidChalakim { chalakim: u8 },

    /// Weekday outside 0..7.
    #[error("invalid weekday: {weekday} (must be 0..7)")]
    InvalidWeekday { weekday: u8 },

    /// Month index not present in the year's month table.
    #[error("invalid month index {month} for year {year} (year has {months_in_year} months)")]
    InvalidMonth {
        month: u8,
        year: i32,
        months_in_year: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_hour() {
        let e = MoladError::InvalidHour { hour: 24 };
        assert_eq!(e.to_string(), "invalid hour: 24 (must be 0..24)");
    }

    #[test]
    fn display_invalid_chalakim() {
        let e = MoladError::InvalidChalakim { chalakim: 48 };
        assert_eq!(e.to_string(), "invalid chalakim: 48 (must be 0..18)");
    }

    #[test]
    fn display_invalid_month() {
        let e = MoladError::InvalidMonth {
            month: 12,
            year: 5785,
            months_in_year: 12,
        };
        assert_eq!(
            e.to_string(),
            "invalid month index 12 for year 5785 (year has 12 months)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<MoladError>();
    }
}
