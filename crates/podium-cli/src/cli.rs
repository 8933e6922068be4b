//! CLI argument definitions for the race result dashboards.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use podium_model::View;

#[derive(Parser)]
#[command(
    name = "podium",
    version,
    about = "Ski race result dashboards in the terminal",
    long_about = "Render race result dashboards from a results export.\n\n\
                  Cross-country shows rank points, podiums and finishing tiers.\n\
                  Lower cup shows best FIS points and DNF/DSQ counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the cross-country dashboard.
    CrossCountry(ViewArgs),

    /// Show the lower cup dashboard.
    LowerCup(LowerCupArgs),

    /// List the seasons, athletes, disciplines and categories of a view.
    Options(OptionsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Results export (CSV with the race result schema).
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Season code (default: most recent season).
    #[arg(long = "season", value_name = "YEAR")]
    pub season: Option<i64>,

    /// Athlete to show; repeat to compare athletes (default: best ranked).
    #[arg(long = "athlete", value_name = "NAME")]
    pub athletes: Vec<String>,

    /// Restrict to a discipline; repeatable (default: all).
    #[arg(long = "discipline", value_name = "NAME")]
    pub disciplines: Vec<String>,
}

#[derive(Args)]
pub struct LowerCupArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Restrict to a category code; repeatable (default: all).
    #[arg(long = "category", value_name = "CODE")]
    pub categories: Vec<String>,

    #[command(flatten)]
    pub audience: AudienceArgs,

    /// Only races held in Switzerland.
    #[arg(long = "swiss-only")]
    pub swiss_only: bool,
}

/// Narrow the athletes a view considers.
#[derive(Args)]
pub struct AudienceArgs {
    /// Athlete gender (M or W); repeatable (default: all).
    #[arg(long = "gender", value_name = "CODE")]
    pub genders: Vec<String>,

    /// Athlete nation code; repeatable (default: all).
    #[arg(long = "nation", value_name = "CODE")]
    pub nations: Vec<String>,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// View whose options are listed.
    #[arg(long = "view", value_enum, default_value = "cross-country")]
    pub view: ViewArg,

    /// Season for the athlete list (default: most recent season).
    #[arg(long = "season", value_name = "YEAR")]
    pub season: Option<i64>,

    #[command(flatten)]
    pub audience: AudienceArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    CrossCountry,
    LowerCup,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::CrossCountry => View::CrossCountry,
            ViewArg::LowerCup => View::LowerCup,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
