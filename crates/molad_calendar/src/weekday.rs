//! Weekdays, anchored on Shabbos = 0 so that `% 7` indexes the table directly.

use std::str::FromStr;

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Weekday {
    Shabbos,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All weekdays in table order (index 0 = Shabbos).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Shabbos,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Shabbos",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

impl Weekday {
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Shabbos => 0,
            Self::Sunday => 1,
            Self::Monday => 2,
            Self::Tuesday => 3,
            Self::Wednesday => 4,
            Self::Thursday => 5,
            Self::Friday => 6,
        }
    }

    /// # Errors
    ///
    /// [`CalendarError::InvalidWeekdayIndex`] for `index >= 7`.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        ALL_WEEKDAYS
            .get(index as usize)
            .copied()
            .ok_or(CalendarError::InvalidWeekdayIndex { index })
    }

    /// Case-insensitive lookup; "Shabbat" and "Saturday" are accepted for Shabbos.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        let key = name.trim().to_ascii_lowercase();
        let day = match key.as_str() {
            "shabbos" | "shabbat" | "saturday" => Self::Shabbos,
            "sunday" => Self::Sunday,
            "monday" => Self::Monday,
            "tuesday" => Self::Tuesday,
            "wednesday" => Self::Wednesday,
            "thursday" => Self::Thursday,
            "friday" => Self::Friday,
            _ => {
                return Err(CalendarError::UnknownWeekdayName {
                    name: name.to_string(),
                });
            }
        };
        Ok(day)
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shabbos_is_anchor() {
        assert_eq!(Weekday::Shabbos.index(), 0);
        assert_eq!(Weekday::from_index(0).unwrap(), Weekday::Shabbos);
    }

    #[test]
    fn indices_sequential() {
        for (i, d) in ALL_WEEKDAYS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn index_7_rejected() {
        assert_eq!(
            Weekday::from_index(7).unwrap_err(),
            CalendarError::InvalidWeekdayIndex { index: 7 }
        );
    }

    #[test]
    fn names_roundtrip() {
        for d in ALL_WEEKDAYS {
            assert_eq!(d.name().parse::<Weekday>().unwrap(), d);
        }
    }

    #[test]
    fn shabbos_aliases() {
        assert_eq!(Weekday::from_name("Saturday").unwrap(), Weekday::Shabbos);
        assert_eq!(Weekday::from_name("shabbat").unwrap(), Weekday::Shabbos);
    }
}
