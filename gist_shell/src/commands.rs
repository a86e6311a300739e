//! Command-line surface of the terminal host.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gist_core::settings::SettingField;

/// One-sentence AI summaries for markdown notes
#[derive(Parser, Debug)]
#[command(name = "gist", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// sled database holding the saved settings
    #[arg(long, global = true, env = "GIST_DB_PATH", default_value = "gist_db")]
    pub db: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run "Create AI Summary" with NOTE as the active document
    Summarize {
        /// Markdown note to summarize
        note: PathBuf,
    },
    /// Show or change the summary settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// List the commands the extension registers
    Commands,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Change one setting and save immediately
    Set {
        /// endpoint, model or token
        field: SettingField,
        value: String,
    },
}
