use gist_core::settings::SettingField;

use super::dto::SettingsView;

pub fn format_settings(view: &SettingsView) -> String {
    let mut lines = vec![format!("⚙️ {}", view.heading), String::new()];

    for row in &view.rows {
        let value = if row.value.is_empty() {
            format!("<{}>", row.placeholder)
        } else if row.field == SettingField::Token {
            mask_token(&row.value)
        } else {
            row.value.clone()
        };
        lines.push(format!("{}: {}", row.name, value));
        if let Some(description) = row.description {
            lines.push(format!("    {}", description));
        }
    }

    lines.join("\n")
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(3).collect();
    format!("{}…", visible)
}
