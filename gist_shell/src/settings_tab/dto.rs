use gist_core::settings::SettingField;

pub const SETTINGS_HEADING: &str = "AI Summary Settings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub field: SettingField,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub heading: &'static str,
    pub rows: Vec<SettingRow>,
}
