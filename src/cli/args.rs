//! CLI argument definitions for `UniScout`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use chrono::NaiveDate;
use logger::Level;
use uni_scout::config::ConfigOverrides;
use uni_scout::core::models::{ApplicationStatus, EventStatus, ResourceKind};
use uni_scout::core::render::CardFormat;
use uni_scout::core::screen::ProfileSection;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts
/// to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// University profile section argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SectionArg {
    /// Name, location, website, description
    Overview,
    /// Location & Environment profile
    Location,
    /// Academics profile
    Academics,
}

impl From<SectionArg> for ProfileSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Overview => Self::Overview,
            SectionArg::Location => Self::Location,
            SectionArg::Academics => Self::Academics,
        }
    }
}

impl std::fmt::Display for SectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Overview => "overview",
            Self::Location => "location",
            Self::Academics => "academics",
        };
        write!(f, "{as_str}")
    }
}

/// Resource screen kind argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum KindArg {
    /// Entrepreneurship resources
    Entrepreneurship,
    /// Innovation opportunities
    Innovation,
    /// Scholarships
    Scholarships,
    /// Support services
    Support,
}

impl From<KindArg> for ResourceKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Entrepreneurship => Self::Entrepreneurship,
            KindArg::Innovation => Self::Innovation,
            KindArg::Scholarships => Self::Scholarship,
            KindArg::Support => Self::SupportService,
        }
    }
}

/// Output format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain terminal text
    Text,
    /// Markdown
    Markdown,
}

impl From<FormatArg> for CardFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
        };
        write!(f, "{as_str}")
    }
}

/// Event status argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum EventStatusArg {
    /// Event has not happened yet
    Upcoming,
    /// User registered for the event
    Registered,
    /// User attended the event
    Attended,
    /// User missed the event
    Missed,
}

impl From<EventStatusArg> for EventStatus {
    fn from(arg: EventStatusArg) -> Self {
        match arg {
            EventStatusArg::Upcoming => Self::Upcoming,
            EventStatusArg::Registered => Self::Registered,
            EventStatusArg::Attended => Self::Attended,
            EventStatusArg::Missed => Self::Missed,
        }
    }
}

/// Application status argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ApplicationStatusArg {
    /// Application submitted
    Applied,
    /// In the screening stage
    Screening,
    /// Interviewing
    Interview,
    /// Offer received
    Offer,
    /// Application rejected
    Rejected,
    /// Application withdrawn
    Withdrawn,
}

impl From<ApplicationStatusArg> for ApplicationStatus {
    fn from(arg: ApplicationStatusArg) -> Self {
        match arg {
            ApplicationStatusArg::Applied => Self::Applied,
            ApplicationStatusArg::Screening => Self::Screening,
            ApplicationStatusArg::Interview => Self::Interview,
            ApplicationStatusArg::Offer => Self::Offer,
            ApplicationStatusArg::Rejected => Self::Rejected,
            ApplicationStatusArg::Withdrawn => Self::Withdrawn,
        }
    }
}

/// Tracker collection argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TrackerKindArg {
    /// Career events
    Events,
    /// Career goals
    Goals,
    /// Job applications
    Applications,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `store_path`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TrackerSubcommand {
    /// List tracked events, goals, and applications.
    List {
        /// Limit the listing to one collection
        #[arg(long, value_enum)]
        kind: Option<TrackerKindArg>,

        /// Card ids to show expanded
        #[arg(long, value_name = "ID", num_args = 1..)]
        expand: Vec<String>,
    },
    /// Add a career event (initial status: upcoming).
    AddEvent {
        /// Event title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: NaiveDate,

        /// Event location
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,
    },
    /// Add a career goal (initial status: not_started).
    AddGoal {
        /// Goal title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Target date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        target_date: Option<NaiveDate>,
    },
    /// Add a job application (initial status: applied).
    AddApplication {
        /// Company name
        #[arg(value_name = "COMPANY")]
        company: String,

        /// Role applied for
        #[arg(value_name = "ROLE")]
        role: String,

        /// Application date (YYYY-MM-DD; defaults to today)
        #[arg(long, value_name = "DATE")]
        applied_on: Option<NaiveDate>,

        /// Free-text notes
        #[arg(long, value_name = "NOTES")]
        notes: Option<String>,
    },
    /// Update an event's status.
    EventStatus {
        /// Event id
        #[arg(value_name = "ID")]
        id: String,
        /// New status
        #[arg(value_enum, value_name = "STATUS")]
        status: EventStatusArg,
    },
    /// Update an application's status.
    ApplicationStatus {
        /// Application id
        #[arg(value_name = "ID")]
        id: String,
        /// New status
        #[arg(value_enum, value_name = "STATUS")]
        status: ApplicationStatusArg,
    },
    /// Update a goal's progress (0-100; 100 completes the goal).
    GoalProgress {
        /// Goal id
        #[arg(value_name = "ID")]
        id: String,
        /// New progress percentage
        #[arg(value_name = "PROGRESS")]
        progress: u8,
    },
    /// Delete a tracked row (requires confirmation).
    Delete {
        /// Which collection the row belongs to
        #[arg(value_enum, value_name = "KIND")]
        kind: TrackerKindArg,
        /// Row id
        #[arg(value_name = "ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum OpenSubcommand {
    /// Open an arbitrary URL.
    Url {
        /// The URL to open
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Compose an email.
    Email {
        /// Recipient address
        #[arg(value_name = "TO")]
        to: String,
        /// Subject line
        #[arg(long, value_name = "SUBJECT", default_value = "")]
        subject: String,
    },
    /// Dial a phone number.
    Phone {
        /// The phone number to dial
        #[arg(value_name = "NUMBER")]
        number: String,
    },
    /// Open a Google Maps search.
    Maps {
        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show a university profile screen.
    University {
        /// University id
        #[arg(value_name = "ID")]
        id: String,

        /// Profile section to show
        #[arg(long, value_enum, default_value_t = SectionArg::Overview)]
        section: SectionArg,

        /// Card ids to show expanded
        #[arg(long, value_name = "ID", num_args = 1..)]
        expand: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Write the rendered screen to a file (relative paths land in
        /// the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the programs offered by a university.
    Programs {
        /// University id
        #[arg(value_name = "UNIVERSITY_ID")]
        university_id: String,

        /// Free-text search query
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,

        /// Filter by degree type (e.g., BS, BA); "all" disables the filter
        #[arg(long, value_name = "TYPE")]
        degree_type: Option<String>,

        /// Card ids to show expanded
        #[arg(long, value_name = "ID", num_args = 1..)]
        expand: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Write the rendered screen to a file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show a resource screen (entrepreneurship, innovation,
    /// scholarships, or support services).
    Resources {
        /// University id
        #[arg(value_name = "UNIVERSITY_ID")]
        university_id: String,

        /// Which resource screen to show
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Free-text search query
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,

        /// Filter by category; "all" disables the filter
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Card ids to show expanded
        #[arg(long, value_name = "ID", num_args = 1..)]
        expand: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Write the rendered screen to a file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Track career events, goals, and job applications.
    Tracker {
        #[command(subcommand)]
        subcommand: TrackerSubcommand,
    },
    /// Hand a link, email, or phone number to the platform opener.
    Open {
        #[command(subcommand)]
        subcommand: OpenSubcommand,
    },
    /// Write demo content into the store document.
    Seed {
        /// Overwrite an existing store document
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "uniscout",
    about = "UniScout command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config store document path
    #[arg(long = "config-store-path", value_name = "PATH")]
    pub config_store_path: Option<PathBuf>,

    /// Override config store document path (short form)
    #[arg(long = "store-path", value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Override config user id
    #[arg(long = "config-user-id", value_name = "USER")]
    pub config_user_id: Option<String>,

    /// Override config user id (short form)
    #[arg(long = "user", value_name = "USER")]
    pub user: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--user`) take precedence over long-form
    /// flags (e.g., `--config-user-id`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            store_path: self
                .store_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_store_path
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            user_id: self.user.clone().or_else(|| self.config_user_id.clone()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
