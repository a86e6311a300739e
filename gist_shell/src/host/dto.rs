/// Zero-based line and character offset inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const START: Position = Position { line: 0, ch: 0 };
}
