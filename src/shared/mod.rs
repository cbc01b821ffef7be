/// Shared kernel - Common utilities and error types
///
/// This module is used by every layer of the application.
pub mod error;
pub mod result;

pub use result::Result;
