//! CLI argument definitions for `fiber-track`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fiber_model::LocationCategory;
use fiber_state::{StatusFilter, ThemeMode};

#[derive(Parser)]
#[command(
    name = "fiber-track",
    version,
    about = "Fiber Track Pro - browse fiber-optic installation projects",
    long_about = "Browse fiber-optic installation projects from the terminal.\n\n\
                  Lists, detail tabs and the location map are filtered and paginated\n\
                  the same way the dashboard pages are."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Color theme for tables (light, dark, system). Overrides the settings file.
    #[arg(long = "theme", value_name = "MODE", global = true)]
    pub theme: Option<ThemeMode>,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List projects, filtered and paginated.
    Projects(ProjectsArgs),

    /// Show one project and a page of one of its tabs.
    Project(ProjectArgs),

    /// List project locations shown on the map.
    Map(MapArgs),

    /// Show dashboard totals.
    Summary,

    /// Run the real-time clock.
    Clock(ClockArgs),

    /// Show or initialize the settings file.
    Config(ConfigArgs),

    /// Sign in with a demo account.
    Login(LoginArgs),
}

/// Page selection shared by paginated commands.
#[derive(Parser)]
pub struct PageArgs {
    /// Page to show (1-based; out-of-range pages are clamped).
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the settings file).
    #[arg(long = "per-page", value_name = "N")]
    pub per_page: Option<usize>,
}

#[derive(Parser)]
pub struct ProjectsArgs {
    /// Case-insensitive text matched against name, id and location.
    #[arg(long = "search", short = 's', value_name = "QUERY")]
    pub search: Option<String>,

    /// Status filter: all, not-started, in-progress, completed.
    #[arg(long = "status", value_name = "STATUS", default_value = "all")]
    pub status: StatusFilter,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Project id, e.g. FO-JKT-002.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Tab to open: milestones, reports, documents, activities.
    ///
    /// Unknown values are ignored and the default tab is shown.
    #[arg(long = "tab", value_name = "TAB")]
    pub tab: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Only locations in this area code (e.g. JKT), case-insensitive.
    #[arg(long = "area", value_name = "CODE")]
    pub area: Option<String>,

    /// Only locations of this category.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<LocationCategory>,

    /// Only locations still missing field documentation.
    #[arg(long = "undocumented")]
    pub undocumented: bool,
}

#[derive(Parser)]
pub struct ClockArgs {
    /// Number of ticks to print before exiting.
    #[arg(long = "ticks", value_name = "N", default_value_t = 5)]
    pub ticks: usize,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the default settings file if none exists.
    #[arg(long = "init")]
    pub init: bool,
}

#[derive(Parser)]
pub struct LoginArgs {
    /// Account email.
    #[arg(value_name = "EMAIL")]
    pub email: String,

    /// Account password.
    #[arg(long = "password", short = 'p', value_name = "PASSWORD")]
    pub password: String,
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
