pub mod dto;
pub mod handler;
pub mod helpers;
pub mod prompt;

pub use dto::ComposerConfig;
pub use handler::{ChatCompletionComposer, SummaryComposer};
