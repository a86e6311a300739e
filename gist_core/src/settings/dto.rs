use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TOKEN: &str = "";

/// Endpoint, model and token used for every summary request.
///
/// Missing keys in a stored blob fall back to the defaults above.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SummarySettings {
    pub endpoint: String,
    pub model: String,
    pub token: String,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

impl SummarySettings {
    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::Endpoint => &self.endpoint,
            SettingField::Model => &self.model,
            SettingField::Token => &self.token,
        }
    }

    pub fn set(&mut self, field: SettingField, value: String) {
        match field {
            SettingField::Endpoint => self.endpoint = value,
            SettingField::Model => self.model = value,
            SettingField::Token => self.token = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Endpoint,
    Model,
    Token,
}

impl SettingField {
    pub const ALL: [SettingField; 3] = [
        SettingField::Endpoint,
        SettingField::Model,
        SettingField::Token,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingField::Endpoint => "Endpoint",
            SettingField::Model => "Model",
            SettingField::Token => "Token",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            SettingField::Endpoint => None,
            SettingField::Model => Some("The model to use for summaries."),
            SettingField::Token => Some("API token to use for authentication."),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SettingField::Endpoint => "Enter URL",
            SettingField::Model => "Enter model name",
            SettingField::Token => "Enter API token",
        }
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SettingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "endpoint" => Ok(SettingField::Endpoint),
            "model" => Ok(SettingField::Model),
            "token" => Ok(SettingField::Token),
            other => Err(format!(
                "unknown setting '{}', expected one of: endpoint, model, token",
                other
            )),
        }
    }
}
