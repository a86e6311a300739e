pub mod dto;
pub mod handler;

pub use dto::{SettingField, SummarySettings};
pub use handler::SettingsStore;
