use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gist_core::ai::{ComposerConfig, SummaryComposer};
use gist_core::{GistError, GistResult};

use super::dto::Position;
use super::handler::{Clipboard, DocumentView, HostContext, Notifier, Workspace};
use super::helpers::insert_at;

#[derive(Clone)]
pub struct FakeDocument {
    pub name: Option<String>,
    pub text: Arc<Mutex<String>>,
}

impl FakeDocument {
    pub fn new(name: Option<&str>, text: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            text: Arc::new(Mutex::new(text.to_string())),
        }
    }

    pub fn contents(&self) -> String {
        self.text.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentView for FakeDocument {
    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    async fn text(&self) -> GistResult<String> {
        Ok(self.contents())
    }

    async fn replace_range(&self, text: &str, at: Position) -> GistResult<()> {
        let mut guard = self.text.lock().unwrap();
        let updated = insert_at(&guard, at, text);
        *guard = updated;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWorkspace {
    active: Mutex<Option<FakeDocument>>,
}

impl FakeWorkspace {
    pub fn with_document(document: FakeDocument) -> Self {
        Self {
            active: Mutex::new(Some(document)),
        }
    }

    pub fn switch_to(&self, document: Option<FakeDocument>) {
        *self.active.lock().unwrap() = document;
    }
}

impl Workspace for FakeWorkspace {
    fn active_document(&self) -> Option<Box<dyn DocumentView>> {
        self.active
            .lock()
            .unwrap()
            .clone()
            .map(|doc| Box::new(doc) as Box<dyn DocumentView>)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub contents: Mutex<Option<String>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> GistResult<()> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

pub struct FakeHost {
    pub workspace: Arc<FakeWorkspace>,
    pub notifier: Arc<RecordingNotifier>,
    pub clipboard: Arc<RecordingClipboard>,
}

impl FakeHost {
    pub fn new(workspace: FakeWorkspace) -> Self {
        Self {
            workspace: Arc::new(workspace),
            notifier: Arc::new(RecordingNotifier::default()),
            clipboard: Arc::new(RecordingClipboard::default()),
        }
    }

    pub fn context(&self) -> HostContext {
        HostContext::new(
            self.workspace.clone(),
            self.notifier.clone(),
            self.clipboard.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposerCall {
    pub document_name: String,
    pub document_text: String,
    pub config: ComposerConfig,
}

/// Records every call and answers with a fixed reply, or fails when the
/// reply is `None`.
pub struct FakeComposer {
    reply: Option<String>,
    pub calls: Mutex<Vec<ComposerCall>>,
}

impl FakeComposer {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ComposerCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryComposer for FakeComposer {
    async fn generate_summary(
        &self,
        document_name: &str,
        document_text: &str,
        config: &ComposerConfig,
    ) -> GistResult<String> {
        self.calls.lock().unwrap().push(ComposerCall {
            document_name: document_name.to_string(),
            document_text: document_text.to_string(),
            config: config.clone(),
        });
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(GistError::Api {
                status: 429,
                body: "rate limited".to_string(),
            }),
        }
    }
}
