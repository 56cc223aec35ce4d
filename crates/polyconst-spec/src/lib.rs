pub mod loader;
pub mod parser;
pub mod resolver;
pub mod types;

// Re-exports
pub use loader::{load_document, LoadError};
pub use resolver::{resolve, Project};
pub use types::error::SpecError;
