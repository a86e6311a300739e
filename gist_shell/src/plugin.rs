use std::sync::Arc;

use gist_core::GistResult;
use gist_core::ai::SummaryComposer;
use gist_core::settings::{SettingsStore, SummarySettings};
use gist_core::storage::KeyValueStore;
use tokio::sync::RwLock;

use crate::host::HostContext;
use crate::settings_tab::SettingsTab;
use crate::summary::handler::{COMMAND_ID, COMMAND_NAME};
use crate::summary::{InvocationOutcome, create_ai_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// Extension root: owns the settings and hands them to the command handler
/// and the settings tab.
pub struct SummaryPlugin {
    settings: Arc<RwLock<SummarySettings>>,
    settings_store: SettingsStore,
    composer: Arc<dyn SummaryComposer>,
}

impl SummaryPlugin {
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        composer: Arc<dyn SummaryComposer>,
    ) -> GistResult<Self> {
        let settings_store = SettingsStore::new(store);
        let settings = settings_store.load()?;
        log::info!(
            "Loaded summary settings: endpoint={}, model={}",
            settings.endpoint,
            settings.model
        );

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            settings_store,
            composer,
        })
    }

    pub fn commands(&self) -> Vec<CommandInfo> {
        vec![CommandInfo {
            id: COMMAND_ID,
            name: COMMAND_NAME,
        }]
    }

    /// Returns `None` for an unknown command id.
    pub async fn run_command(&self, id: &str, host: &HostContext) -> Option<InvocationOutcome> {
        match id {
            COMMAND_ID => Some(self.create_summary(host).await),
            _ => {
                log::warn!("Unknown command: {}", id);
                None
            }
        }
    }

    pub async fn create_summary(&self, host: &HostContext) -> InvocationOutcome {
        create_ai_summary(host, self.composer.as_ref(), &self.settings).await
    }

    pub fn settings_tab(&self) -> SettingsTab {
        SettingsTab::new(self.settings.clone(), self.settings_store.clone())
    }

    pub async fn settings(&self) -> SummarySettings {
        self.settings.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{FakeComposer, FakeDocument, FakeHost, FakeWorkspace};
    use gist_core::ai::ChatCompletionComposer;
    use gist_core::settings::SettingField;
    use gist_core::storage::{MemoryStore, SledStore};
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_load_defaults() {
        let plugin = SummaryPlugin::load(
            Arc::new(MemoryStore::new()),
            Arc::new(FakeComposer::replying("summary")),
        )
        .unwrap();

        assert_eq!(plugin.settings().await, SummarySettings::default());
        assert_eq!(
            plugin.commands(),
            vec![CommandInfo {
                id: "ai-summary-create",
                name: "Create AI Summary"
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let plugin = SummaryPlugin::load(
            Arc::new(MemoryStore::new()),
            Arc::new(FakeComposer::replying("summary")),
        )
        .unwrap();
        let host = FakeHost::new(FakeWorkspace::default());

        assert!(plugin.run_command("nope", &host.context()).await.is_none());
        assert!(host.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_settings_survive_restart() {
        let temp_dir = TempDir::new().unwrap();
        let db = sled::open(temp_dir.path()).unwrap();
        let store = Arc::new(SledStore::new(&db).unwrap());
        let composer = Arc::new(FakeComposer::replying("summary"));

        let plugin = SummaryPlugin::load(store.clone(), composer.clone()).unwrap();
        let tab = plugin.settings_tab();
        tab.on_change(SettingField::Model, "gpt-4o".to_string()).await.unwrap();
        tab.on_change(SettingField::Endpoint, "https://example.com".to_string())
            .await
            .unwrap();

        let restarted = SummaryPlugin::load(store, composer).unwrap();
        let settings = restarted.settings().await;
        assert_eq!(settings.endpoint, "https://example.com");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.token, "");
    }

    #[tokio::test]
    async fn test_summary_request_uses_current_settings() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-live"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "> [!ai-summary]- AI Summary\n> done" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let plugin = SummaryPlugin::load(
            Arc::new(MemoryStore::new()),
            Arc::new(ChatCompletionComposer::new()),
        )
        .unwrap();
        let tab = plugin.settings_tab();
        tab.on_change(SettingField::Endpoint, server.uri()).await.unwrap();
        tab.on_change(SettingField::Model, "gpt-4.1-mini".to_string())
            .await
            .unwrap();
        tab.on_change(SettingField::Token, "sk-live".to_string())
            .await
            .unwrap();

        let note = FakeDocument::new(None, "# Week 1\nIntro to cells.");
        let host = FakeHost::new(FakeWorkspace::with_document(note.clone()));

        let outcome = plugin.run_command("ai-summary-create", &host.context()).await;
        let Some(InvocationOutcome::Opened(mut dialog)) = outcome else {
            panic!("expected the result dialog to open");
        };
        assert_eq!(dialog.summary(), "> [!ai-summary]- AI Summary\n> done");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body["model"], "gpt-4.1-mini");
        assert_eq!(body["messages"][1]["content"], "Untitled\n# Week 1\nIntro to cells.");

        assert!(dialog.add_to_note(&host.context()).await.unwrap());
        assert_eq!(
            note.contents(),
            "> [!ai-summary]- AI Summary\n> done\n\n# Week 1\nIntro to cells."
        );
    }
}
