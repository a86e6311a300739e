pub mod dto;
pub mod handler;
pub mod helpers;

pub use dto::DialogAction;
pub use handler::ResultDialog;
