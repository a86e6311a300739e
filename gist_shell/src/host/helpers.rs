use super::dto::Position;

/// Inserts `text` into `content` at `at`.
///
/// Lines past the end clamp to the end of the document, characters past the
/// end of a line clamp to the end of that line.
pub fn insert_at(content: &str, at: Position, text: &str) -> String {
    let offset = byte_offset(content, at);
    let mut result = String::with_capacity(content.len() + text.len());
    result.push_str(&content[..offset]);
    result.push_str(text);
    result.push_str(&content[offset..]);
    result
}

fn byte_offset(content: &str, at: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..at.line {
        match content[line_start..].find('\n') {
            Some(idx) => line_start += idx + 1,
            None => return content.len(),
        }
    }

    let line_end = content[line_start..]
        .find('\n')
        .map(|idx| line_start + idx)
        .unwrap_or(content.len());

    content[line_start..line_end]
        .char_indices()
        .nth(at.ch)
        .map(|(idx, _)| line_start + idx)
        .unwrap_or(line_end)
}
