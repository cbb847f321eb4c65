//! Radices of the molad time system and the synodic-month increment.
//!
//! A molad is counted in days of the week, hours, minutes and chalakim.
//! One chelek is 1/1080 of an hour, so a minute holds 18 chalakim.

/// Chalakim in one minute (1080 / 60).
pub const CHALAKIM_PER_MINUTE: u32 = 18;
/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;
/// Hours in one day.
pub const HOURS_PER_DAY: u32 = 24;
/// Days in one week. Weekday arithmetic is modulo this value.
pub const DAYS_PER_WEEK: u32 = 7;

/// Chalakim in one hour.
pub const CHALAKIM_PER_HOUR: u32 = CHALAKIM_PER_MINUTE * MINUTES_PER_HOUR;
/// Chalakim in one day.
pub const CHALAKIM_PER_DAY: u32 = CHALAKIM_PER_HOUR * HOURS_PER_DAY;
/// Chalakim in one week.
pub const CHALAKIM_PER_WEEK: u32 = CHALAKIM_PER_DAY * DAYS_PER_WEEK;

/// Mean length of a lunar month in mixed-radix units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynodicMonth {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub chalakim: u32,
}

impl SynodicMonth {
    /// Days contributed to the weekday after dropping whole weeks.
    pub const fn weekday_offset(self) -> u32 {
        self.days % DAYS_PER_WEEK
    }

    /// Total length in chalakim.
    pub const fn total_chalakim(self) -> u32 {
        self.days * CHALAKIM_PER_DAY
            + self.hours * CHALAKIM_PER_HOUR
            + self.minutes * CHALAKIM_PER_MINUTE
            + self.chalakim
    }
}

/// 29 days, 12 hours, 44 minutes and 1 chelek.
pub const SYNODIC_MONTH: SynodicMonth = SynodicMonth {
    days: 29,
    hours: 12,
    minutes: 44,
    chalakim: 1,
};

/// The synodic month expressed in chalakim (29d 12h 793p).
pub const SYNODIC_MONTH_CHALAKIM: u32 = SYNODIC_MONTH.total_chalakim();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chalakim_per_hour_is_1080() {
        assert_eq!(CHALAKIM_PER_HOUR, 1080);
    }

    #[test]
    fn week_length() {
        assert_eq!(CHALAKIM_PER_DAY, 25_920);
        assert_eq!(CHALAKIM_PER_WEEK, 181_440);
    }

    #[test]
    fn synodic_month_total() {
        // 29 * 25920 + 12 * 1080 + 793
        assert_eq!(SYNODIC_MONTH_CHALAKIM, 765_433);
    }

    #[test]
    fn synodic_month_weekday_offset_is_one() {
        assert_eq!(SYNODIC_MONTH.weekday_offset(), 1);
    }

    #[test]
    fn minutes_and_chelek_make_793_parts() {
        let parts = SYNODIC_MONTH.minutes * CHALAKIM_PER_MINUTE + SYNODIC_MONTH.chalakim;
        assert_eq!(parts, 793);
    }
}
