//! Subcommand bodies. Each returns the lines to print.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use molad_calendar::{MoladAnnouncement, month_display_name};
use molad_config::{MoladConfig, MonthRef};
use molad_time::{
    LunarInstant, MoladSequence, StopTarget, checked_advance_one_month, is_leap_year,
    months_in_year, year_in_cycle,
};

use crate::cli::{NextArgs, SequenceArgs};

fn load_config(path: Option<&Path>) -> Result<MoladConfig> {
    match path {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            MoladConfig::load(p).with_context(|| format!("loading {}", p.display()))
        }
        None => {
            debug!("no config file given, using built-in seed and target");
            Ok(MoladConfig::default())
        }
    }
}

fn parse_month_ref(s: &str) -> MonthRef {
    match s.trim().parse::<u8>() {
        Ok(i) => MonthRef::Index(i),
        Err(_) => MonthRef::Name(s.to_string()),
    }
}

fn announce(m: &LunarInstant) -> Result<String> {
    let a = MoladAnnouncement::new(m).with_context(|| format!("naming molad {m}"))?;
    Ok(a.to_string())
}

/// Name of the target month in its own year, or `None` if that year lacks it
/// (Adar II of a common year). Such a sequence runs into the following year.
fn target_month_name(target: StopTarget) -> Option<&'static str> {
    month_display_name(target.month, target.year).ok()
}

/// Announcement lines from the seed to the target.
pub fn sequence(args: &SequenceArgs) -> Result<Vec<String>> {
    let _cmd = info_span!("sequence").entered();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(year) = args.target_year {
        config.target.year = year;
    }
    if let Some(month) = &args.target_month {
        config.target.month = parse_month_ref(month);
    }
    if args.exclude_seed {
        config.output.include_seed = false;
    }

    let seed = config.seed_instant().context("invalid seed in config")?;
    let stop = config.stop_target().context("invalid target in config")?;

    let moladot = if config.output.include_seed {
        MoladSequence::new(seed, stop)
    } else {
        MoladSequence::excluding_seed(seed, stop)
    };
    let target = moladot.target();
    match target_month_name(target) {
        Some(name) => info!(
            seed = %seed,
            target = name,
            target_year = target.year,
            "generating moladot"
        ),
        None => warn!(
            target_year = target.year,
            target_month = target.month,
            "target month does not occur in target year, stopping at the next year"
        ),
    }
    let lines = moladot.map(|m| announce(&m)).collect::<Result<Vec<_>>>()?;
    info!(n = lines.len(), "moladot generated");
    Ok(lines)
}

/// The next `count` moladot after the seed.
pub fn next(args: &NextArgs) -> Result<Vec<String>> {
    let _cmd = info_span!("next").entered();
    let config = load_config(args.config.as_deref())?;
    let seed = config.seed_instant().context("invalid seed in config")?;

    let moladot: Vec<_> = std::iter::successors(checked_advance_one_month(&seed), |m| {
        checked_advance_one_month(m)
    })
    .take(args.count)
    .collect();
    if moladot.len() < args.count {
        bail!("year overflow after {} of {} moladot from {seed}", moladot.len(), args.count);
    }
    moladot.iter().map(announce).collect()
}

/// Leap-cycle summary for each year.
pub fn leap(years: &[i32]) -> Vec<String> {
    years
        .iter()
        .map(|&y| {
            format!(
                "{y}: year {} of 19, {} ({} months)",
                year_in_cycle(y),
                if is_leap_year(y) { "leap" } else { "common" },
                months_in_year(y)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn seq_args() -> SequenceArgs {
        SequenceArgs {
            config: None,
            target_year: None,
            target_month: None,
            exclude_seed: false,
        }
    }

    #[test]
    fn default_sequence_runs_to_shevat_5785() {
        let lines = sequence(&seq_args()).unwrap();
        assert_eq!(lines.len(), 17);
        assert_eq!(
            lines[0],
            "[Molad Cheshvan 5784] Shabbos 6:33 PM + 1 cholokim"
        );
        assert_eq!(
            lines[16],
            "[Molad Shevat 5785] Wednesday 6:17 AM + 17 cholokim"
        );
    }

    #[test]
    fn exclude_seed_flag() {
        let args = SequenceArgs {
            exclude_seed: true,
            ..seq_args()
        };
        let lines = sequence(&args).unwrap();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("[Molad Kislev 5784]"));
    }

    #[test]
    fn target_month_by_index() {
        let args = SequenceArgs {
            target_year: Some(5784),
            target_month: Some("9".into()),
            ..seq_args()
        };
        let lines = sequence(&args).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("[Molad Tevet 5784]"));
    }

    #[test]
    fn unknown_target_month_fails() {
        let args = SequenceArgs {
            target_month: Some("Floreal".into()),
            ..seq_args()
        };
        assert!(sequence(&args).is_err());
    }

    #[test]
    fn sequence_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[target]\nyear = 5784\nmonth = \"Adar II\"").unwrap();
        let args = SequenceArgs {
            config: Some(file.path().to_path_buf()),
            ..seq_args()
        };
        let lines = sequence(&args).unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "[Molad Adar II 5784] Sunday 10:13 AM + 6 cholokim"
        );
    }

    #[test]
    fn target_month_name_follows_leap_year() {
        assert_eq!(target_month_name(StopTarget::new(5784, 12)), Some("Adar II"));
        assert_eq!(target_month_name(StopTarget::new(5785, 10)), Some("Shevat"));
        assert_eq!(target_month_name(StopTarget::new(5785, 12)), None);
    }

    #[test]
    fn target_month_absent_from_target_year_runs_into_next_year() {
        let args = SequenceArgs {
            target_year: Some(5785),
            target_month: Some("12".into()),
            ..seq_args()
        };
        let lines = sequence(&args).unwrap();
        assert!(lines.last().unwrap().starts_with("[Molad Tishrei 5786]"));
    }

    #[test]
    fn next_three() {
        let lines = next(&NextArgs {
            config: None,
            count: 3,
        })
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "[Molad Kislev 5784] Monday 7:17 AM + 2 cholokim",
                "[Molad Tevet 5784] Tuesday 8:01 PM + 3 cholokim",
                "[Molad Shevat 5784] Thursday 8:45 AM + 4 cholokim",
            ]
        );
    }

    #[test]
    fn next_zero_is_empty() {
        let lines = next(&NextArgs {
            config: None,
            count: 0,
        })
        .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn next_past_last_representable_year_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[seed]\nyear = 2147483647\nmonth = \"Av\"\nweekday = 0\nhour = 0\nminute = 0\nchalakim = 0"
        )
        .unwrap();
        let config = Some(file.path().to_path_buf());
        let one = next(&NextArgs {
            config: config.clone(),
            count: 1,
        })
        .unwrap();
        assert!(one[0].starts_with("[Molad Elul 2147483647]"));
        let err = next(&NextArgs { config, count: 2 }).unwrap_err();
        assert!(err.to_string().contains("year overflow"));
    }

    #[test]
    fn leap_lines() {
        assert_eq!(
            leap(&[5784, 5785]),
            vec![
                "5784: year 8 of 19, leap (13 months)",
                "5785: year 9 of 19, common (12 months)",
            ]
        );
    }
}
