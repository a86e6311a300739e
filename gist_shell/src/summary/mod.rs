pub mod dto;
pub mod handler;

pub use dto::InvocationOutcome;
pub use handler::create_ai_summary;
