use indexmap::IndexMap;
use serde::Deserialize;

use super::common::LiteralValue;
use super::constant::Operand;

/// Per-target output configuration block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    /// Output file path. Some targets also derive syntax from it:
    /// the C include guard and the Java wrapping class name.
    pub path: String,

    /// PHP namespace; an empty string means "no namespace declaration".
    pub namespace: Option<String>,

    /// Java package; an empty string means "no package declaration".
    pub package: Option<String>,
}

impl TargetConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: None,
            package: None,
        }
    }
}

/// The document exactly as parsed from YAML, before resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub enums: Vec<RawEnum>,

    #[serde(default)]
    pub constants: Vec<RawConstant>,

    /// Requested targets, insertion-ordered. Resolution rejects a
    /// document without this key.
    pub outputs: Option<IndexMap<String, TargetConfig>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEnum {
    pub name: String,
    pub values: Vec<String>,
}

/// A raw constant entry. Exactly one of the value/operation keys is
/// expected; `Constant::from_raw` dispatches on whichever is present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawConstant {
    pub name: String,
    pub value: Option<LiteralValue>,
    pub concat: Option<Vec<Operand>>,
    pub sum: Option<Vec<Operand>>,
    pub sub: Option<Vec<Operand>>,
    pub mul: Option<Vec<Operand>>,
    pub div: Option<Vec<Operand>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_target_config_minimal() {
        let cfg: TargetConfig = serde_yaml::from_str("path: out.h").unwrap();
        assert_eq!(cfg.path, "out.h");
        assert_eq!(cfg.namespace, None);
        assert_eq!(cfg.package, None);
    }

    #[test]
    fn test_target_config_with_namespace() {
        let cfg: TargetConfig =
            serde_yaml::from_str("{path: constants.php, namespace: App}").unwrap();
        assert_eq!(cfg.namespace.as_deref(), Some("App"));
    }

    #[test]
    fn test_outputs_preserve_insertion_order() {
        let doc: RawDocument = serde_yaml::from_str(
            "outputs:\n  rust: {path: a.rs}\n  c: {path: a.h}\n  python: {path: a.py}\n",
        )
        .unwrap();
        let outputs = doc.outputs.unwrap();
        let keys: Vec<&String> = outputs.keys().collect();
        assert_eq!(keys, ["rust", "c", "python"]);
    }

    #[test]
    fn test_document_without_outputs_parses() {
        // Rejecting the missing key is the resolver's job, with its own
        // error, not a serde failure.
        let doc: RawDocument = serde_yaml::from_str("enums: []").unwrap();
        assert!(doc.outputs.is_none());
    }
}
