use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Molad calculator for the Hebrew calendar.
#[derive(Parser)]
#[command(name = "molad", version, about = "Molad (new moon) calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Announce every molad from the seed up to the target month
    Sequence(SequenceArgs),
    /// Announce the next N moladot after the seed
    Next(NextArgs),
    /// Show leap-cycle position of Hebrew years
    Leap {
        /// Hebrew years (e.g. 5784)
        #[arg(required = true, allow_negative_numbers = true)]
        years: Vec<i32>,
    },
}

#[derive(clap::Args)]
pub struct SequenceArgs {
    /// Path to TOML configuration file (defaults: seed Cheshvan 5784, target Shevat 5785)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override target year from config
    #[arg(long)]
    pub target_year: Option<i32>,

    /// Override target month (name or index) from config
    #[arg(long)]
    pub target_month: Option<String>,

    /// Print only the moladot after the seed
    #[arg(long)]
    pub exclude_seed: bool,
}

#[derive(clap::Args)]
pub struct NextArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of moladot to print
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_sequence_overrides() {
        let cli = Cli::try_parse_from([
            "molad",
            "-vv",
            "sequence",
            "--target-year",
            "5790",
            "--target-month",
            "Nisan",
            "--exclude-seed",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Sequence(args) = cli.command else {
            panic!("expected sequence subcommand");
        };
        assert_eq!(args.target_year, Some(5790));
        assert_eq!(args.target_month.as_deref(), Some("Nisan"));
        assert!(args.exclude_seed);
        assert!(args.config.is_none());
    }

    #[test]
    fn parse_next_default_count() {
        let cli = Cli::try_parse_from(["molad", "next"]).unwrap();
        let Command::Next(args) = cli.command else {
            panic!("expected next subcommand");
        };
        assert_eq!(args.count, 1);
    }

    #[test]
    fn parse_leap_years() {
        let cli = Cli::try_parse_from(["molad", "leap", "5784", "5785", "-16"]).unwrap();
        let Command::Leap { years } = cli.command else {
            panic!("expected leap subcommand");
        };
        assert_eq!(years, vec![5784, 5785, -16]);
    }

    #[test]
    fn leap_requires_a_year() {
        assert!(Cli::try_parse_from(["molad", "leap"]).is_err());
    }
}
