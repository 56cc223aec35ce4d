use crate::types::config::RawDocument;
use crate::types::error::SpecError;

/// Parse a polyconst YAML document.
pub fn parse_document(content: &str, file_path: &str) -> Result<RawDocument, SpecError> {
    serde_yaml::from_str(content).map_err(|e| SpecError::Parse {
        file: file_path.to_string(),
        message: e.to_string(),
    })
}
