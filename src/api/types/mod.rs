//! API request/response types

pub mod chat;
pub mod error;

pub use chat::{AskRequest, AskResponse};
pub use error::ApiError;
