use std::str::FromStr;

pub const DIALOG_TITLE: &str = "AI Generated Summary";
pub const COPY_BUTTON: &str = "Copy to Clipboard";
pub const INSERT_BUTTON: &str = "Add to Note";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDialog {
    pub title: String,
    pub body: String,
    pub buttons: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Copy,
    AddToNote,
    Close,
}

impl FromStr for DialogAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "copy" => Ok(DialogAction::Copy),
            "a" | "add" | "insert" => Ok(DialogAction::AddToNote),
            "q" | "close" | "quit" => Ok(DialogAction::Close),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}
