use super::dto::RenderedDialog;

pub fn format_dialog(dialog: &RenderedDialog) -> String {
    let buttons = dialog
        .buttons
        .iter()
        .map(|label| format!("[{}]", label))
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "== {} ==\n\n{}\n\n{}\n(c) copy, (a) add to note, (q) close",
        dialog.title, dialog.body, buttons
    )
}
