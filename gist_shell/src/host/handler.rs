use std::sync::Arc;

use async_trait::async_trait;
use gist_core::GistResult;

use super::dto::Position;

/// The focused editable document.
#[async_trait]
pub trait DocumentView: Send + Sync {
    /// Display name, if the host knows one.
    fn name(&self) -> Option<String>;
    async fn text(&self) -> GistResult<String>;
    async fn replace_range(&self, text: &str, at: Position) -> GistResult<()>;
}

pub trait Workspace: Send + Sync {
    fn active_document(&self) -> Option<Box<dyn DocumentView>>;
}

pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> GistResult<()>;
}

/// Capabilities the host lends to the extension.
#[derive(Clone)]
pub struct HostContext {
    pub workspace: Arc<dyn Workspace>,
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl HostContext {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            workspace,
            notifier,
            clipboard,
        }
    }

    pub fn notice(&self, message: &str) {
        self.notifier.notice(message);
    }
}
