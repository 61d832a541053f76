/// Shared kernel - error types, result alias and filesystem security checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
