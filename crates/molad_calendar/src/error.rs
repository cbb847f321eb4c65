//! Error types for name-table lookups.

/// Lookup failures against the month and weekday tables.
///
/// An index error means the seed or a carry computation is broken; callers
/// should surface it rather than wrap it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month index outside the table for the year's leap status.
    #[error("invalid month index {index} (leap year: {leap})")]
    InvalidMonthIndex { index: u8, leap: bool },

    /// Weekday index outside 0..7.
    #[error("invalid weekday index {index} (must be 0..7)")]
    InvalidWeekdayIndex { index: u8 },

    /// Month name not found in the table.
    #[error("unknown month name: {name:?}")]
    UnknownMonthName { name: String },

    /// Weekday name not found in the table.
    #[error("unknown weekday name: {name:?}")]
    UnknownWeekdayName { name: String },
}
