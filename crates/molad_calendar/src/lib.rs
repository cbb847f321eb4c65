//! Name tables and announcement formatting for molad sequences.
//!
//! This crate provides:
//! - `HebrewMonth` (Nisan-first, with the Adar I / Adar II leap slot)
//! - `Weekday` (zero-anchored on Shabbos)
//! - `MoladAnnouncement`, the one-line rendering of a `LunarInstant`

pub mod announce;
pub mod error;
pub mod month;
pub mod weekday;

pub use announce::MoladAnnouncement;
pub use error::CalendarError;
pub use month::{ALL_MONTHS, HebrewMonth, month_display_name};
pub use weekday::{ALL_WEEKDAYS, Weekday};
