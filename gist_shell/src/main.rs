mod commands;
mod host;
mod plugin;
mod settings_tab;
mod summary;
mod summary_modal;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gist_core::ai::ChatCompletionComposer;
use gist_core::storage::SledStore;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{Cli, Command, SettingsAction};
use crate::host::HostContext;
use crate::host::terminal::{FileWorkspace, SystemClipboard, TerminalNotifier};
use crate::plugin::SummaryPlugin;
use crate::settings_tab::helpers::format_settings;
use crate::summary::InvocationOutcome;
use crate::summary::handler::COMMAND_ID;
use crate::summary_modal::helpers::format_dialog;
use crate::summary_modal::{DialogAction, ResultDialog};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    log::info!("Starting gist with database {}", cli.db.display());

    let db = sled::open(&cli.db)?;
    let store = Arc::new(SledStore::new(&db)?);
    let composer = Arc::new(ChatCompletionComposer::new());
    let plugin = SummaryPlugin::load(store, composer)?;

    match cli.command {
        Command::Summarize { note } => summarize(&plugin, &note).await?,
        Command::Settings { action: None } => {
            let view = plugin.settings_tab().display().await;
            println!("{}", format_settings(&view));
        }
        Command::Settings {
            action: Some(SettingsAction::Set { field, value }),
        } => {
            let tab = plugin.settings_tab();
            tab.on_change(field, value).await?;
            println!("{}", format_settings(&tab.display().await));
        }
        Command::Commands => {
            for command in plugin.commands() {
                println!("{}\t{}", command.id, command.name);
            }
        }
    }

    Ok(())
}

async fn summarize(plugin: &SummaryPlugin, note: &Path) -> Result<()> {
    let host = HostContext::new(
        Arc::new(FileWorkspace::new(note)),
        Arc::new(TerminalNotifier),
        Arc::new(SystemClipboard::new()),
    );

    if let Some(InvocationOutcome::Opened(mut dialog)) = plugin.run_command(COMMAND_ID, &host).await {
        run_dialog(&mut dialog, &host).await?;
    }
    Ok(())
}

/// Feeds stdin lines to the dialog until it closes. End of input dismisses it.
async fn run_dialog(dialog: &mut ResultDialog, host: &HostContext) -> Result<()> {
    if let Some(content) = dialog.content() {
        println!("{}", format_dialog(content));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while dialog.is_open() {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.parse::<DialogAction>() {
            Ok(DialogAction::Copy) => {
                if let Err(e) = dialog.copy_to_clipboard(host) {
                    println!("Could not copy the summary: {}", e);
                }
            }
            Ok(DialogAction::AddToNote) => {
                if let Err(e) = dialog.add_to_note(host).await {
                    println!("Could not add the summary to the note: {}", e);
                }
            }
            Ok(DialogAction::Close) => break,
            Err(e) => println!("{}", e),
        }
    }

    dialog.close();
    Ok(())
}
