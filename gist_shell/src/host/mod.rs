pub mod dto;
pub mod handler;
pub mod helpers;
pub mod terminal;

#[cfg(test)]
pub mod testing;

pub use dto::Position;
pub use handler::HostContext;
