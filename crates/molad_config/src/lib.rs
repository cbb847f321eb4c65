//! TOML configuration for molad sequences.
//!
//! ```toml
//! [seed]            # last known molad
//! year = 5784
//! month = "Cheshvan"
//! weekday = "Shabbos"
//! hour = 18
//! minute = 33
//! chalakim = 1
//!
//! [target]
//! year = 5785
//! month = "Shevat"
//!
//! [output]
//! include_seed = true
//! ```
//!
//! Every section is optional; missing sections fall back to the defaults above.
//! Months and weekdays may be given by name or by table index.

pub mod error;

use std::path::Path;

use serde::Deserialize;

use molad_calendar::{HebrewMonth, Weekday};
use molad_time::{LunarInstant, MONTHS_IN_LEAP_YEAR, StopTarget};

pub use error::ConfigError;

/// Top-level molad configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoladConfig {
    /// Last known molad; the sequence starts here.
    #[serde(default)]
    pub seed: SeedToml,

    /// Where the sequence stops.
    #[serde(default)]
    pub target: TargetToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// A month given by name ("Shevat", "Adar II") or table index (10).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MonthRef {
    Index(u8),
    Name(String),
}

impl MonthRef {
    /// Table index of the referenced month.
    pub fn index(&self) -> Result<u8, ConfigError> {
        match self {
            Self::Index(i) => Ok(*i),
            Self::Name(name) => Ok(HebrewMonth::from_name(name)?.index()),
        }
    }
}

impl From<HebrewMonth> for MonthRef {
    fn from(month: HebrewMonth) -> Self {
        Self::Name(month.name().to_string())
    }
}

/// A weekday given by name ("Shabbos") or zero-anchored index (0).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WeekdayRef {
    Index(u8),
    Name(String),
}

impl WeekdayRef {
    pub fn index(&self) -> Result<u8, ConfigError> {
        match self {
            Self::Index(i) => Ok(Weekday::from_index(*i)?.index()),
            Self::Name(name) => Ok(Weekday::from_name(name)?.index()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedToml {
    #[serde(default = "default_seed_year")]
    pub year: i32,
    #[serde(default = "default_seed_month")]
    pub month: MonthRef,
    #[serde(default = "default_seed_weekday")]
    pub weekday: WeekdayRef,
    #[serde(default = "default_seed_hour")]
    pub hour: u8,
    #[serde(default = "default_seed_minute")]
    pub minute: u8,
    #[serde(default = "default_seed_chalakim")]
    pub chalakim: u8,
}

impl Default for SeedToml {
    fn default() -> Self {
        Self {
            year: default_seed_year(),
            month: default_seed_month(),
            weekday: default_seed_weekday(),
            hour: default_seed_hour(),
            minute: default_seed_minute(),
            chalakim: default_seed_chalakim(),
        }
    }
}

// Molad Cheshvan 5784: Shabbos 6:33 PM + 1 chelek
fn default_seed_year() -> i32 {
    5784
}
fn default_seed_month() -> MonthRef {
    HebrewMonth::Cheshvan.into()
}
fn default_seed_weekday() -> WeekdayRef {
    WeekdayRef::Name(Weekday::Shabbos.name().to_string())
}
fn default_seed_hour() -> u8 {
    18
}
fn default_seed_minute() -> u8 {
    33
}
fn default_seed_chalakim() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetToml {
    #[serde(default = "default_target_year")]
    pub year: i32,
    #[serde(default = "default_target_month")]
    pub month: MonthRef,
}

impl Default for TargetToml {
    fn default() -> Self {
        Self {
            year: default_target_year(),
            month: default_target_month(),
        }
    }
}

fn default_target_year() -> i32 {
    5785
}
fn default_target_month() -> MonthRef {
    HebrewMonth::Shevat.into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Emit the seed molad before the advanced ones.
    #[serde(default = "default_true")]
    pub include_seed: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self { include_seed: true }
    }
}

fn default_true() -> bool {
    true
}

impl MoladConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The seed as a validated molad.
    pub fn seed_instant(&self) -> Result<LunarInstant, ConfigError> {
        let s = &self.seed;
        Ok(LunarInstant::new(
            s.year,
            s.month.index()?,
            s.weekday.index()?,
            s.hour,
            s.minute,
            s.chalakim,
        )?)
    }

    /// The sequence stop target.
    ///
    /// The month need not exist in the target year (Adar II of a common year);
    /// such a sequence stops on entering the following year.
    pub fn stop_target(&self) -> Result<StopTarget, ConfigError> {
        let month = self.target.month.index()?;
        if month >= MONTHS_IN_LEAP_YEAR {
            return Err(ConfigError::InvalidTarget { month });
        }
        Ok(StopTarget::new(self.target.year, month))
    }
}
