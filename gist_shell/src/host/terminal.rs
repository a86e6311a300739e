use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use gist_core::{GistError, GistResult};
use tokio::fs;

use super::dto::Position;
use super::handler::{Clipboard, DocumentView, Notifier, Workspace};
use super::helpers::insert_at;

/// A workspace whose only document is a markdown file on disk.
///
/// The file counts as the active document for as long as it exists.
pub struct FileWorkspace {
    path: PathBuf,
}

impl FileWorkspace {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Workspace for FileWorkspace {
    fn active_document(&self) -> Option<Box<dyn DocumentView>> {
        if self.path.is_file() {
            Some(Box::new(FileDocument::new(&self.path)))
        } else {
            log::warn!("Note {} is not a readable file", self.path.display());
            None
        }
    }
}

pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentView for FileDocument {
    fn name(&self) -> Option<String> {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    async fn text(&self) -> GistResult<String> {
        Ok(fs::read_to_string(&self.path).await?)
    }

    async fn replace_range(&self, text: &str, at: Position) -> GistResult<()> {
        let content = fs::read_to_string(&self.path).await?;
        fs::write(&self.path, insert_at(&content, at, text)).await?;
        log::info!("Inserted {} chars into {}", text.len(), self.path.display());
        Ok(())
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notice(&self, message: &str) {
        println!("» {}", message);
    }
}

/// The system clipboard, held open for the life of the host.
///
/// On Linux the copied text is served by the live `arboard::Clipboard`, so
/// it has to outlive each copy.
pub struct SystemClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(Self::open()),
        }
    }

    fn open() -> Option<arboard::Clipboard> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("System clipboard unavailable: {}", e);
                None
            }
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> GistResult<()> {
        let mut guard = self.clipboard.lock().unwrap_or_else(|e| e.into_inner());
        if guard.is_none() {
            *guard = Self::open();
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| GistError::Clipboard("no system clipboard available".to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| GistError::Clipboard(e.to_string()))
    }
}
