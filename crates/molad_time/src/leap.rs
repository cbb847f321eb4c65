//! Leap years of the 19-year (Metonic) cycle.
//!
//! Years 3, 6, 8, 11, 14, 17 and 19 of each cycle carry a thirteenth month.
//! Year 19 has residue 0 modulo 19.

/// Length of the leap cycle in years.
pub const LEAP_CYCLE_YEARS: i32 = 19;

/// Residues of `year mod 19` that mark a leap year.
pub const LEAP_YEAR_RESIDUES: [u8; 7] = [0, 3, 6, 8, 11, 14, 17];

/// Months in a common year.
pub const MONTHS_IN_COMMON_YEAR: u8 = 12;
/// Months in a leap year (Adar I and Adar II).
pub const MONTHS_IN_LEAP_YEAR: u8 = 13;

/// Whether `year` has a thirteenth month.
///
/// Total over all integers; negative years follow the same cycle.
pub fn is_leap_year(year: i32) -> bool {
    let residue = year.rem_euclid(LEAP_CYCLE_YEARS) as u8;
    LEAP_YEAR_RESIDUES.contains(&residue)
}

/// 1-based position of `year` in its 19-year cycle (1..=19).
pub fn year_in_cycle(year: i32) -> u8 {
    match year.rem_euclid(LEAP_CYCLE_YEARS) as u8 {
        0 => 19,
        r => r,
    }
}

/// Number of months in `year`: 13 for leap years, 12 otherwise.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        MONTHS_IN_LEAP_YEAR
    } else {
        MONTHS_IN_COMMON_YEAR
    }
}
