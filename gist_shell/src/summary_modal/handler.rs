use gist_core::GistResult;

use super::dto::{COPY_BUTTON, DIALOG_TITLE, INSERT_BUTTON, RenderedDialog};
use crate::host::{HostContext, Position};
use crate::summary::handler::NO_ACTIVE_VIEW_NOTICE;

pub const COPIED_NOTICE: &str = "Summary copied to clipboard!";

/// Shows one summary and lets the user copy it or put it on top of the
/// active note.
#[derive(Debug)]
pub struct ResultDialog {
    summary: String,
    content: Option<RenderedDialog>,
}

impl ResultDialog {
    pub fn new(summary: String) -> Self {
        Self {
            summary,
            content: None,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&RenderedDialog> {
        self.content.as_ref()
    }

    pub fn open(&mut self) -> &RenderedDialog {
        self.content.insert(RenderedDialog {
            title: DIALOG_TITLE.to_string(),
            body: self.summary.clone(),
            buttons: vec![COPY_BUTTON, INSERT_BUTTON],
        })
    }

    /// Leaves the dialog open.
    pub fn copy_to_clipboard(&self, host: &HostContext) -> GistResult<()> {
        if let Err(e) = host.clipboard.write_text(&self.summary) {
            log::error!("Failed to copy summary to clipboard: {}", e);
            return Err(e);
        }
        host.notice(COPIED_NOTICE);
        Ok(())
    }

    /// Inserts the summary at the start of whichever note is active now.
    ///
    /// Returns `false` when no note is active; the dialog then stays open.
    pub async fn add_to_note(&mut self, host: &HostContext) -> GistResult<bool> {
        let Some(document) = host.workspace.active_document() else {
            host.notice(NO_ACTIVE_VIEW_NOTICE);
            return Ok(false);
        };

        let text = format!("{}\n\n", self.summary);
        if let Err(e) = document.replace_range(&text, Position::START).await {
            log::error!("Failed to insert summary into note: {}", e);
            return Err(e);
        }

        self.close();
        Ok(true)
    }

    pub fn close(&mut self) {
        self.content = None;
    }
}
