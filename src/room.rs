pub mod error;
pub mod message;
pub mod store;
pub mod sweeper;
