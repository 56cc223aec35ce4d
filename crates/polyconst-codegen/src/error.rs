use polyconst_spec::types::common::ValueType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    /// Requested output key outside the supported set.
    #[error("`{0}` is not a supported output language")]
    UnsupportedLanguage(String),

    /// A target block is missing a key its language requires.
    #[error("output `{language}` requires the `{field}` key")]
    MissingTargetField {
        language: &'static str,
        field: &'static str,
    },

    /// A literal constant whose type has no direct rendering reached
    /// emission; only integer and string literals are emittable.
    #[error("constant `{name}` has unsupported literal type {value_type:?}")]
    IllegalConstantType { name: String, value_type: ValueType },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
