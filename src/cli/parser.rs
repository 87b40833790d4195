use clap::{Parser, Subcommand};

/// Command-line interface definition for NapMap
/// CLI application to log sleep and analyze sleep debt
#[derive(Parser)]
#[command(
    name = "napmap",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal sleep diary: log sleep/wake times, track sleep debt, and review trends",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or a custom setup)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run on built-in defaults without touching the config file
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config directory and default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an interactive sleep logging session
    ///
    /// Records live in memory for the duration of the session only.
    Session,
}
