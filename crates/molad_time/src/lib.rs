//! Molad arithmetic in the mixed-radix units of the Hebrew calendar.
//!
//! This crate provides:
//! - `LunarInstant`, a molad held as weekday, hour, minute and chalakim
//! - The 19-year leap cycle (`is_leap_year`, `months_in_year`)
//! - The synodic-month advance (29d 12h 44m 1p) with full carry handling
//! - `MoladSequence`, a lazy iterator from a seed molad to a target month
//!
//! Name tables and formatting live in `molad_calendar`.

pub mod advance;
pub mod error;
pub mod instant;
pub mod leap;
pub mod sequence;
pub mod units;

pub use advance::{advance_months, advance_one_month, checked_advance_one_month};
pub use error::MoladError;
pub use instant::{LunarInstant, TISHREI_INDEX};
pub use leap::{
    LEAP_YEAR_RESIDUES, MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR, is_leap_year,
    months_in_year, year_in_cycle,
};
pub use sequence::{MoladSequence, StopTarget, molad_sequence};
pub use units::{
    CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, CHALAKIM_PER_WEEK, DAYS_PER_WEEK,
    HOURS_PER_DAY, MINUTES_PER_HOUR, SYNODIC_MONTH, SYNODIC_MONTH_CHALAKIM, SynodicMonth,
};
