//! # Quill Shared
//!
//! Request and response types shared between the server and API clients.

pub mod dto;
pub mod response;

pub use dto::ValidationError;
pub use response::ErrorResponse;
