use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::aggregate::{Period, DEFAULT_PATTERN_TAGS, MAX_CUT_PERCENT, MAX_PROJECTION_MONTHS};
use crate::config::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::models::{ClockTime, Source, Tag, YearMonth};

/// walletcamp: a spending boot camp that reinterprets every expense as waste, breath or growth
#[derive(Parser, Debug)]
#[command(name = "walletcamp", version, about, long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) global: GlobalOpts,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct GlobalOpts {
    /// SQLite database file
    #[arg(global = true, long, env = "WALLETCAMP_DB", value_name = "FILE")]
    pub(crate) db: Option<PathBuf>,

    /// Directory holding budget.json (and the database unless --db is given)
    #[arg(global = true, long, env = "WALLETCAMP_DATA_DIR", value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Pretend today is this date
    #[arg(global = true, long, env = "WALLETCAMP_TODAY", value_name = "YYYY-MM-DD")]
    pub(crate) today: Option<NaiveDate>,

    /// Key for the narrative feedback endpoint
    #[arg(global = true, long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Model asked for narrative feedback
    #[arg(global = true, long, env = "WALLETCAMP_MODEL", default_value = DEFAULT_MODEL)]
    pub(crate) model: String,

    /// OpenAI-compatible chat completions URL
    #[arg(global = true, long, env = "WALLETCAMP_API_URL", default_value = DEFAULT_API_URL)]
    pub(crate) api_url: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Waste share of the last month and the instructor's verdict
    Dashboard {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
    },

    /// Day-by-day spending for one month
    Calendar(CalendarArgs),

    /// Monthly waste/breath/growth report
    Report {
        #[arg(long, value_enum, default_value_t = Source::Card)]
        source: Source,
        /// Month to report (default: the latest with records)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,
    },

    /// Waste vs total correlation and when the money goes
    Patterns {
        #[arg(long, value_enum, default_value_t = Source::Card)]
        source: Source,
        /// Tags to include in the heatmap, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PATTERN_TAGS)]
        tags: Vec<Tag>,
    },

    /// Where the current habits lead
    Forecast {
        #[arg(long, value_enum, default_value_t = Source::Card)]
        source: Source,
        /// Months to project
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PROJECTION_MONTHS)))]
        months: u32,
        /// Percent cut to simulate
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_CUT_PERCENT)))]
        cut: u32,
        /// Ask the language model for the instructor's assessment
        #[arg(long)]
        feedback: bool,
    },

    /// Show or set the monthly budget
    Budget {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Record an expense
    Add {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Change an expense, found by id or by its natural key
    Update {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        changes: ChangeArgs,
    },

    /// Delete an expense, found by id or by its natural key
    Delete {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// List expenses with their ids and tags
    List {
        #[arg(long, value_enum, default_value_t = Source::Manual)]
        source: Source,
        /// Only this month (default: everything)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,
        /// Print totals per day or month instead of the records
        #[arg(long, value_enum)]
        by: Option<Period>,
    },

    /// Write a month of reinterpreted expenses as CSV
    Export {
        #[arg(long, value_enum, default_value_t = Source::Card)]
        source: Source,
        /// Month to export (default: the latest with records)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,
        /// Output file (default: stdout)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the category table and what each pair means
    Categories,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct CalendarArgs {
    #[arg(long, value_enum, default_value_t = Source::Manual)]
    pub(crate) source: Source,
    /// Month to show (default: this month)
    #[arg(long, value_name = "YYYY-MM")]
    pub(crate) month: Option<YearMonth>,
    /// Step back one month
    #[arg(long, conflicts_with = "next")]
    pub(crate) prev: bool,
    /// Step forward one month
    #[arg(long)]
    pub(crate) next: bool,
    /// Move this many months from the shown month (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) shift: i32,
    /// List every expense of this day; its month is shown
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub(crate) day: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum BudgetAction {
    /// Budget state, usage and daily allowance (the default)
    Show,
    /// Save a new monthly budget in won
    Set { amount: i64 },
}

#[derive(Args, Debug, Clone)]
pub(crate) struct EntryArgs {
    /// Date spent (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub(crate) date: Option<NaiveDate>,
    #[arg(long, value_name = "HH:MM")]
    pub(crate) time: Option<ClockTime>,
    #[arg(long)]
    pub(crate) major: String,
    #[arg(long)]
    pub(crate) minor: String,
    /// Amount in won
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) cost: i64,
    #[arg(long, default_value = "")]
    pub(crate) memo: String,
}

/// Which record to touch: `--id`, or date/major/minor with optional time and cost.
#[derive(Args, Debug, Clone)]
pub(crate) struct TargetArgs {
    #[arg(long, conflicts_with_all = ["date", "time", "major", "minor", "cost"])]
    pub(crate) id: Option<i64>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub(crate) date: Option<NaiveDate>,
    /// Missing times match 00:00
    #[arg(long, value_name = "HH:MM")]
    pub(crate) time: Option<ClockTime>,
    #[arg(long)]
    pub(crate) major: Option<String>,
    #[arg(long)]
    pub(crate) minor: Option<String>,
    #[arg(long)]
    pub(crate) cost: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ChangeArgs {
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub(crate) set_date: Option<NaiveDate>,
    #[arg(long, value_name = "HH:MM")]
    pub(crate) set_time: Option<ClockTime>,
    #[arg(long)]
    pub(crate) set_major: Option<String>,
    #[arg(long)]
    pub(crate) set_minor: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) set_cost: Option<i64>,
    #[arg(long)]
    pub(crate) set_memo: Option<String>,
}
