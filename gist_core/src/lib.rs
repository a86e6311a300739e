pub mod ai;
pub mod error;
pub mod settings;
pub mod storage;

pub use error::{GistError, GistResult};
