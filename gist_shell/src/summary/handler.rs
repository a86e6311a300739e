use std::sync::Arc;

use gist_core::ai::dto::DEFAULT_DOCUMENT_NAME;
use gist_core::ai::{ComposerConfig, SummaryComposer};
use gist_core::settings::SummarySettings;
use tokio::sync::RwLock;

use super::dto::InvocationOutcome;
use crate::host::HostContext;
use crate::summary_modal::ResultDialog;

pub const COMMAND_ID: &str = "ai-summary-create";
pub const COMMAND_NAME: &str = "Create AI Summary";

pub const NO_ACTIVE_VIEW_NOTICE: &str = "No active markdown view.";
pub const EMPTY_NOTE_NOTICE: &str = "The current note is empty.";
pub const GENERATING_NOTICE: &str = "Generating summary...";
pub const FAILED_NOTICE: &str = "Failed to generate summary. Please check the console for details.";

/// Runs "Create AI Summary" once against the active note.
///
/// Nothing stops a second invocation from starting while this one is
/// waiting on the API; each runs to completion and opens its own dialog.
pub async fn create_ai_summary(
    host: &HostContext,
    composer: &dyn SummaryComposer,
    settings: &Arc<RwLock<SummarySettings>>,
) -> InvocationOutcome {
    let Some(document) = host.workspace.active_document() else {
        host.notice(NO_ACTIVE_VIEW_NOTICE);
        return InvocationOutcome::NoActiveView;
    };

    let document_name = document.name();
    log::debug!("Active note name: {:?}", document_name);

    let content = match document.text().await {
        Ok(content) => content,
        Err(e) => {
            log::error!("Error generating summary: {}", e);
            host.notice(FAILED_NOTICE);
            return InvocationOutcome::Failed;
        }
    };

    if content.trim().is_empty() {
        host.notice(EMPTY_NOTE_NOTICE);
        return InvocationOutcome::EmptyNote;
    }

    host.notice(GENERATING_NOTICE);

    let config = ComposerConfig::from(&*settings.read().await);
    let document_name = document_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string());

    match composer
        .generate_summary(&document_name, &content, &config)
        .await
    {
        Ok(summary) => {
            let mut dialog = ResultDialog::new(summary);
            dialog.open();
            InvocationOutcome::Opened(dialog)
        }
        Err(e) => {
            log::error!("Error generating summary: {}", e);
            host.notice(FAILED_NOTICE);
            InvocationOutcome::Failed
        }
    }
}
