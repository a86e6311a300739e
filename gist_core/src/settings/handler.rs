use std::sync::Arc;

use super::dto::SummarySettings;
use crate::error::{GistError, GistResult};
use crate::storage::KeyValueStore;

/// Loads and saves [`SummarySettings`] through the host's key-value store.
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored settings merged over the defaults.
    ///
    /// A blob that cannot be read as settings is logged and replaced by the
    /// defaults; storage failures are returned.
    pub fn load(&self) -> GistResult<SummarySettings> {
        let data = match self.store.load_data() {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::info!("No saved summary settings, using defaults");
                return Ok(SummarySettings::default());
            }
            Err(GistError::Serialization(e)) => {
                log::error!("Stored summary settings are not valid JSON: {}", e);
                return Ok(SummarySettings::default());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_value::<SummarySettings>(data) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log::error!("Failed to deserialize summary settings: {}", e);
                Ok(SummarySettings::default())
            }
        }
    }

    pub async fn save(&self, settings: &SummarySettings) -> GistResult<()> {
        let data = serde_json::to_value(settings)?;
        self.store.save_data(&data).await
    }
}
