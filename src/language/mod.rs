// Types representing a classified chord sheet

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
