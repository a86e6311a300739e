pub mod dto;
pub mod handler;
pub mod helpers;

pub use handler::SettingsTab;
