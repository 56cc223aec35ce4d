use thiserror::Error;

/// Configuration errors: the document is readable but does not describe
/// a valid generation run. All of these abort before any output exists.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("{file}: YAML parse error: {message}")]
    Parse { file: String, message: String },

    #[error("document has no `outputs` key - nothing to generate")]
    MissingOutputs,

    #[error("constant `{name}` matches none of value/concat/sum/sub/mul/div")]
    UnknownConstantShape { name: String },

    #[error("operation constant `{name}` has no literal operand to infer a type from")]
    UntypedOperation { name: String },

    #[error("enum `{name}` has no values")]
    EmptyEnum { name: String },

    #[error("enum `{name}` declares label `{label}` more than once")]
    DuplicateEnumLabel { name: String, label: String },
}
