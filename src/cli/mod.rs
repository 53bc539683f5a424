//! Command-line surface.

pub mod commands;
mod edit;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use huddle_schedule::format::Locale;

pub use edit::Edit;

#[derive(Debug, Parser)]
#[command(
    name = "huddle",
    version,
    about = "Weekly Lead/Co-Lead rotation roster",
    long_about = "Generates the weekly Lead/Co-Lead roster, applies session edits, \
                  and prints, searches or exports it."
)]
pub struct Cli {
    /// TOML file merged over the bundled roster
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Date display locale (th or en); defaults to output.locale
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Edit applied before the command, in order. Repeatable.
    ///
    /// swap:<weekA>:<weekB>:<lead|colead|both>,
    /// add-holiday:<week>:<YYYY-MM-DD>:<name>,
    /// remove-holiday:<week>:<index>
    #[arg(long = "edit", global = true, value_name = "EDIT")]
    pub edits: Vec<Edit>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every week
    List {
        /// Case-insensitive filter on names and departments
        #[arg(long)]
        search: Option<String>,
        /// Only weeks where this employee ID serves
        #[arg(long, value_name = "ID")]
        employee: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print weeks grouped by month
    Months {
        /// Case-insensitive filter on names and departments
        #[arg(long)]
        search: Option<String>,
    },
    /// Print the week containing a date (default: today)
    Current {
        /// Date to look up (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },
    /// Print roster totals
    Summary,
    /// Write the roster as CSV
    Export {
        /// Output path; '-' for stdout. Defaults to output.export_file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Omit the UTF-8 byte-order mark
        #[arg(long)]
        no_bom: bool,
    },
    /// Validate the configuration and exit
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use huddle_schedule::SwapScope;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edits_and_globals() {
        let cli = Cli::parse_from([
            "huddle",
            "--locale",
            "en",
            "export",
            "--edit",
            "swap:1:2:both",
            "--edit",
            "remove-holiday:11:0",
            "--no-bom",
        ]);
        assert_eq!(cli.locale, Some(Locale::English));
        assert_eq!(
            cli.edits,
            vec![
                Edit::Swap {
                    week_a: 1,
                    week_b: 2,
                    scope: SwapScope::Both
                },
                Edit::RemoveHoliday { week: 11, index: 0 },
            ]
        );
        assert!(matches!(cli.command, Commands::Export { no_bom: true, .. }));
    }
}
