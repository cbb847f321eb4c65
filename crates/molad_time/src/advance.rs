//! Synodic-month advance.
//!
//! Adds 29d 12h 44m 1p to a molad and normalizes the carry chain
//! chelek -> minute -> hour -> weekday. The 29 days only move the weekday
//! (29 mod 7 = 1). The year number rolls over when the month index crosses
//! into Tishrei; the month index wraps after Adar (common year) or Adar II
//! (leap year).

use tracing::{debug, trace, warn};

use crate::instant::{LunarInstant, TISHREI_INDEX};
use crate::leap::months_in_year;
use crate::units::{
    CHALAKIM_PER_MINUTE, DAYS_PER_WEEK, HOURS_PER_DAY, MINUTES_PER_HOUR, SYNODIC_MONTH,
};

/// Split `value` into `(value mod radix, value / radix)`.
fn carry(value: u32, radix: u32) -> (u32, u32) {
    (value % radix, value / radix)
}

/// The molad one synodic month after `instant`, or `None` if the year
/// rollover would pass `i32::MAX`.
///
/// `None` is returned only for Elul of `i32::MAX`. The input is never modified.
pub fn checked_advance_one_month(instant: &LunarInstant) -> Option<LunarInstant> {
    let raw_month = instant.month() + 1;
    let raw_weekday = u32::from(instant.weekday()) + SYNODIC_MONTH.weekday_offset();
    let raw_hour = u32::from(instant.hour()) + SYNODIC_MONTH.hours;
    let raw_minute = u32::from(instant.minute()) + SYNODIC_MONTH.minutes;
    let raw_chalakim = u32::from(instant.chalakim()) + SYNODIC_MONTH.chalakim;

    let (chalakim, minute_carry) = carry(raw_chalakim, CHALAKIM_PER_MINUTE);
    let (minute, hour_carry) = carry(raw_minute + minute_carry, MINUTES_PER_HOUR);
    let (hour, day_carry) = carry(raw_hour + hour_carry, HOURS_PER_DAY);
    // raw_weekday already holds the whole-day offset of the month
    let (weekday, _) = carry(raw_weekday + day_carry, DAYS_PER_WEEK);

    let year = if instant.month() < TISHREI_INDEX && raw_month >= TISHREI_INDEX {
        let Some(next_year) = instant.year().checked_add(1) else {
            warn!(molad = %instant, "year rollover past i32::MAX");
            return None;
        };
        debug!(from = instant.year(), to = next_year, "year rollover at Tishrei");
        next_year
    } else {
        instant.year()
    };
    // Rollover happens before the wrap; it only fires at index 6, below either modulus.
    let month = raw_month % months_in_year(year);

    let next = LunarInstant::from_parts_unchecked(
        year,
        month,
        weekday as u8,
        hour as u8,
        minute as u8,
        chalakim as u8,
    );
    debug_assert!(
        next.is_well_formed(),
        "advance produced an out-of-range molad: {next} from {instant}"
    );
    trace!(from = %instant, to = %next, "advanced one synodic month");
    Some(next)
}

/// The molad one synodic month after `instant`.
///
/// Pure; the input is never modified.
///
/// # Panics
///
/// If `instant` is Elul of `i32::MAX`, whose successor year is not
/// representable. Use [`checked_advance_one_month`] near that boundary.
pub fn advance_one_month(instant: &LunarInstant) -> LunarInstant {
    match checked_advance_one_month(instant) {
        Some(next) => next,
        None => panic!("year overflow advancing molad {instant}"),
    }
}

/// The molad `n` synodic months after `instant`.
///
/// # Panics
///
/// Under the same year-overflow condition as [`advance_one_month`].
pub fn advance_months(instant: &LunarInstant, n: u32) -> LunarInstant {
    (0..n).fold(*instant, |current, _| advance_one_month(&current))
}
