use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bookconnect_core::config::ConfigOverrides;
use bookconnect_core::theme::ThemeMode;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Theme names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Day,
    Night,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Day => ThemeMode::Day,
            ThemeArg::Night => ThemeMode::Night,
        }
    }
}

/// BookConnect: browse a book catalog from the terminal
#[derive(Parser, Debug)]
#[clap(
    name = "bookconnect",
    about = "Browse, filter and preview a book catalog",
    version
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to the platform config directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (YAML or JSON); the bundled sample catalog when omitted
    #[clap(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Books revealed per page
    #[clap(long, global = true)]
    pub page_size: Option<usize>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    pub log_json: bool,
}

impl Cli {
    /// Flags that override configuration file values
    pub fn overrides(&self) -> ConfigOverrides {
        let theme = match &self.command {
            #[cfg(feature = "tui")]
            Command::Browse { theme } => theme.map(ThemeMode::from),
            _ => None,
        };
        ConfigOverrides {
            page_size: self.page_size,
            theme,
            dataset: self.dataset.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the catalog one page at a time
    List {
        /// Number of pages to reveal
        #[clap(long, default_value_t = 1)]
        pages: usize,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Filter the catalog by title, author and genre
    Search {
        /// Case-insensitive title substring
        #[clap(long)]
        title: Option<String>,

        /// Author id (or "any")
        #[clap(long)]
        author: Option<String>,

        /// Genre id (or "any")
        #[clap(long)]
        genre: Option<String>,

        /// Number of pages to reveal
        #[clap(long, default_value_t = 1)]
        pages: usize,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the detail view for a book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List author dropdown options
    Authors {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List genre dropdown options
    Genres {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the display variables for a theme
    Theme {
        /// Theme mode (probed from the terminal when omitted)
        #[clap(value_enum)]
        mode: Option<ThemeArg>,
    },

    /// Open the interactive browser
    #[cfg(feature = "tui")]
    Browse {
        /// Initial theme
        #[clap(long, value_enum)]
        theme: Option<ThemeArg>,
    },
}

impl Command {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Command::List { .. } => "list",
            Command::Search { .. } => "search",
            Command::Show { .. } => "show",
            Command::Authors { .. } => "authors",
            Command::Genres { .. } => "genres",
            Command::Theme { .. } => "theme",
            #[cfg(feature = "tui")]
            Command::Browse { .. } => "browse",
        }
    }

    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            #[cfg(feature = "tui")]
            Command::Browse { .. } => true,
            _ => false,
        }
    }
}
