pub mod error;
pub mod generator;
pub mod render;
pub mod syntax;
pub mod traits;

// Language emitters
pub mod emitters;

// Re-exports
pub use error::CodegenError;
pub use generator::{GeneratedOutput, Generator};
pub use syntax::{Inventory, OpMarks, SyntaxTable};
pub use traits::LanguageEmitter;
