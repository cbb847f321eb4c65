//! `LunarInstant`: a molad expressed in the mixed-radix units of the calendar.

use std::fmt;

use crate::error::MoladError;
use crate::leap::months_in_year;
use crate::units::{
    CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, DAYS_PER_WEEK, HOURS_PER_DAY,
    MINUTES_PER_HOUR,
};

/// Index of Tishrei in the month table. The year number changes here.
pub const TISHREI_INDEX: u8 = 6;

/// A molad: year and month it opens, plus weekday and time of day.
///
/// Weekdays are zero-anchored on Shabbos (0 = Shabbos, 1 = Sunday, ..., 6 = Friday),
/// so `% 7` arithmetic lines up with the weekday table directly.
/// Months are indices into the Nisan-first table; index 12 (Adar II) exists
/// only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarInstant {
    year: i32,
    month: u8,
    weekday: u8,
    hour: u8,
    minute: u8,
    chalakim: u8,
}

impl LunarInstant {
    /// Build an instant, validating every field range.
    ///
    /// # Errors
    ///
    /// Returns [`MoladError`] if a field is out of range or the month index
    /// does not exist in `year`.
    pub fn new(
        year: i32,
        month: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        chalakim: u8,
    ) -> Result<Self, MoladError> {
        if u32::from(hour) >= HOURS_PER_DAY {
            return Err(MoladError::InvalidHour { hour });
        }
        if u32::from(minute) >= MINUTES_PER_HOUR {
            return Err(MoladError::InvalidMinute { minute });
        }
        if u32::from(chalakim) >= CHALAKIM_PER_MINUTE {
            return Err(MoladError::InvalidChalakim { chalakim });
        }
        if u32::from(weekday) >= DAYS_PER_WEEK {
            return Err(MoladError::InvalidWeekday { weekday });
        }
        let months = months_in_year(year);
        if month >= months {
            return Err(MoladError::InvalidMonth {
                month,
                year,
                months_in_year: months,
            });
        }
        Ok(Self::from_parts_unchecked(
            year, month, weekday, hour, minute, chalakim,
        ))
    }

    /// Fields already normalized by the advance engine.
    pub(crate) const fn from_parts_unchecked(
        year: i32,
        month: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        chalakim: u8,
    ) -> Self {
        Self {
            year,
            month,
            weekday,
            hour,
            minute,
            chalakim,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month index (0 = Nisan .. 11 = Adar / Adar I, 12 = Adar II).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Weekday index (0 = Shabbos .. 6 = Friday).
    pub fn weekday(self) -> u8 {
        self.weekday
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn chalakim(self) -> u8 {
        self.chalakim
    }

    /// Offset from Shabbos 00:00 in chalakim, in `0..CHALAKIM_PER_WEEK`.
    pub fn week_parts(self) -> u32 {
        u32::from(self.weekday) * CHALAKIM_PER_DAY
            + u32::from(self.hour) * CHALAKIM_PER_HOUR
            + u32::from(self.minute) * CHALAKIM_PER_MINUTE
            + u32::from(self.chalakim)
    }

    /// Whether every field is inside its radix and the month exists in the year.
    pub fn is_well_formed(self) -> bool {
        u32::from(self.hour) < HOURS_PER_DAY
            && u32::from(self.minute) < MINUTES_PER_HOUR
            && u32::from(self.chalakim) < CHALAKIM_PER_MINUTE
            && u32::from(self.weekday) < DAYS_PER_WEEK
            && self.month < months_in_year(self.year)
    }

    /// The molad one synodic month later.
    ///
    /// # Panics
    ///
    /// If `self` is Elul of `i32::MAX`; see
    /// [`checked_advance_one_month`](crate::advance::checked_advance_one_month).
    pub fn next_molad(self) -> Self {
        crate::advance::advance_one_month(&self)
    }
}

impl fmt::Display for LunarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:02} d{} {:02}:{:02}+{}",
            self.year, self.month, self.weekday, self.hour, self.minute, self.chalakim
        )
    }
}
