//! Human-readable molad announcements.
//!
//! `[Molad Kislev 5784] Monday 7:17 AM + 2 cholokim`

use std::fmt;

use molad_time::{LunarInstant, is_leap_year};

use crate::error::CalendarError;
use crate::month::HebrewMonth;
use crate::weekday::Weekday;

/// A molad with its month and weekday resolved against the name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoladAnnouncement {
    pub year: i32,
    pub month: HebrewMonth,
    /// Whether `year` is a leap year; decides "Adar" vs "Adar I".
    pub leap: bool,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
    pub chalakim: u8,
}

impl MoladAnnouncement {
    /// Resolve names for `instant`.
    ///
    /// # Errors
    ///
    /// [`CalendarError`] if the month or weekday index is outside its table.
    /// A valid `LunarInstant` always resolves.
    pub fn new(instant: &LunarInstant) -> Result<Self, CalendarError> {
        let leap = is_leap_year(instant.year());
        Ok(Self {
            year: instant.year(),
            month: HebrewMonth::from_index(instant.month(), leap)?,
            leap,
            weekday: Weekday::from_index(instant.weekday())?,
            hour: instant.hour(),
            minute: instant.minute(),
            chalakim: instant.chalakim(),
        })
    }

    pub fn month_name(&self) -> &'static str {
        self.month.display_name(self.leap)
    }

    /// Hour on a 12-hour clock (1..=12) and its AM/PM marker.
    pub fn clock_12h(&self) -> (u8, &'static str) {
        let h = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        (h, meridiem)
    }
}

impl fmt::Display for MoladAnnouncement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, meridiem) = self.clock_12h();
        write!(
            f,
            "[Molad {} {}] {} {}:{:02} {} + {} cholokim",
            self.month_name(),
            self.year,
            self.weekday.name(),
            h,
            self.minute,
            meridiem,
            self.chalakim
        )
    }
}
