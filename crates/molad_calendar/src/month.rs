//! Hebrew months, ordered from Nisan.
//!
//! Tishrei (index 6) opens the year number. In a leap year the twelfth slot
//! is Adar I and a thirteenth slot, Adar II, follows it.

use std::str::FromStr;

use molad_time::{MONTHS_IN_COMMON_YEAR, MONTHS_IN_LEAP_YEAR, is_leap_year};

use crate::error::CalendarError;

/// The thirteen month slots of the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HebrewMonth {
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarII,
}

/// All month slots in table order (index 0 = Nisan, 12 = Adar II).
pub const ALL_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::AdarII,
];

const MONTH_NAMES: [&str; 13] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

impl HebrewMonth {
    /// Table name ("Adar" for slot 11 regardless of year).
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index() as usize]
    }

    /// Name as announced in a year of the given leap status.
    ///
    /// Slot 11 reads "Adar I" in a leap year.
    pub fn display_name(self, leap: bool) -> &'static str {
        match self {
            Self::Adar if leap => "Adar I",
            other => other.name(),
        }
    }

    /// 0-based table index (Nisan=0 .. Adar II=12).
    pub const fn index(self) -> u8 {
        match self {
            Self::Nisan => 0,
            Self::Iyar => 1,
            Self::Sivan => 2,
            Self::Tammuz => 3,
            Self::Av => 4,
            Self::Elul => 5,
            Self::Tishrei => 6,
            Self::Cheshvan => 7,
            Self::Kislev => 8,
            Self::Tevet => 9,
            Self::Shevat => 10,
            Self::Adar => 11,
            Self::AdarII => 12,
        }
    }

    /// Month at `index` in a year of the given leap status.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonthIndex`] past the end of the year's table;
    /// Adar II exists only when `leap` is set.
    pub fn from_index(index: u8, leap: bool) -> Result<Self, CalendarError> {
        let len = if leap {
            MONTHS_IN_LEAP_YEAR
        } else {
            MONTHS_IN_COMMON_YEAR
        };
        if index >= len {
            return Err(CalendarError::InvalidMonthIndex { index, leap });
        }
        Ok(ALL_MONTHS[index as usize])
    }

    /// Look a month up by name, ignoring case and surrounding whitespace.
    ///
    /// Accepts "Adar I" / "Adar 1" for slot 11, "Adar II" / "Adar 2" for slot 12,
    /// and the common spellings Tishri, Marcheshvan, Heshvan and Teves.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        let key = name.trim().to_ascii_lowercase();
        let month = match key.as_str() {
            "nisan" | "nissan" => Self::Nisan,
            "iyar" | "iyyar" => Self::Iyar,
            "sivan" => Self::Sivan,
            "tammuz" | "tamuz" => Self::Tammuz,
            "av" => Self::Av,
            "elul" => Self::Elul,
            "tishrei" | "tishri" => Self::Tishrei,
            "cheshvan" | "marcheshvan" | "heshvan" => Self::Cheshvan,
            "kislev" => Self::Kislev,
            "tevet" | "teves" => Self::Tevet,
            "shevat" | "shvat" => Self::Shevat,
            "adar" | "adar i" | "adar 1" => Self::Adar,
            "adar ii" | "adar 2" => Self::AdarII,
            _ => {
                return Err(CalendarError::UnknownMonthName {
                    name: name.to_string(),
                });
            }
        };
        Ok(month)
    }
}

impl FromStr for HebrewMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Announced name of month `index` in `year`.
///
/// Resolves leap status from the 19-year cycle, so index 11 reads "Adar I"
/// in leap years and "Adar" otherwise.
pub fn month_display_name(index: u8, year: i32) -> Result<&'static str, CalendarError> {
    let leap = is_leap_year(year);
    Ok(HebrewMonth::from_index(index, leap)?.display_name(leap))
}
