use std::sync::Arc;

use gist_core::GistResult;
use gist_core::settings::{SettingField, SettingsStore, SummarySettings};
use tokio::sync::RwLock;

use super::dto::{SETTINGS_HEADING, SettingRow, SettingsView};

/// Endpoint, model and token inputs; every change is saved right away.
#[derive(Clone)]
pub struct SettingsTab {
    settings: Arc<RwLock<SummarySettings>>,
    store: SettingsStore,
}

impl SettingsTab {
    pub fn new(settings: Arc<RwLock<SummarySettings>>, store: SettingsStore) -> Self {
        Self { settings, store }
    }

    pub async fn display(&self) -> SettingsView {
        let settings = self.settings.read().await;
        let rows = SettingField::ALL
            .iter()
            .map(|field| SettingRow {
                field: *field,
                name: field.name(),
                description: field.description(),
                placeholder: field.placeholder(),
                value: settings.get(*field).to_string(),
            })
            .collect();

        SettingsView {
            heading: SETTINGS_HEADING,
            rows,
        }
    }

    pub async fn on_change(&self, field: SettingField, value: String) -> GistResult<()> {
        let mut settings = self.settings.write().await;
        settings.set(field, value);
        if let Err(e) = self.store.save(&settings).await {
            log::error!("Failed to save summary settings after {} change: {}", field, e);
            return Err(e);
        }
        log::info!("Saved summary settings after {} change", field);
        Ok(())
    }
}
