use indexmap::IndexMap;

use crate::types::config::{RawDocument, TargetConfig};
use crate::types::constant::Constant;
use crate::types::enum_def::EnumDef;
use crate::types::error::SpecError;

/// A resolved document: the read-only model every emitter shares.
/// Declaration order of constants and enums is emission order; the
/// `outputs` map keeps the document's target order.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub enums: Vec<EnumDef>,
    pub constants: Vec<Constant>,
    pub outputs: IndexMap<String, TargetConfig>,
}

impl Project {
    pub fn has_enums(&self) -> bool {
        !self.enums.is_empty()
    }

    pub fn has_constants(&self) -> bool {
        !self.constants.is_empty()
    }
}

/// Turn a parsed document into the constant/enum model, validating the
/// invariants the YAML layer cannot express.
pub fn resolve(raw: RawDocument) -> Result<Project, SpecError> {
    let outputs = raw.outputs.ok_or(SpecError::MissingOutputs)?;

    let mut enums = Vec::with_capacity(raw.enums.len());
    for e in raw.enums {
        enums.push(EnumDef::new(e.name, e.values)?);
    }

    let mut constants = Vec::with_capacity(raw.constants.len());
    for c in raw.constants {
        constants.push(Constant::from_raw(c)?);
    }

    Ok(Project {
        enums,
        constants,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse_document;

    fn resolve_str(yaml: &str) -> Result<Project, SpecError> {
        resolve(parse_document(yaml, "constants.yaml").unwrap())
    }

    #[test]
    fn test_resolve_full_document() {
        let project = resolve_str(
            r#"
enums:
  - name: Color
    values: [RED, GREEN, BLUE]
constants:
  - name: RETRY_LIMIT
    value: 5
  - name: FULL
    concat: [{value: "a"}, {ref: GREETING}]
outputs:
  c: {path: out.h}
  python: {path: constants.py}
"#,
        )
        .unwrap();

        assert!(project.has_enums());
        assert!(project.has_constants());
        assert_eq!(project.constants[1].name, "FULL");
        let keys: Vec<&String> = project.outputs.keys().collect();
        assert_eq!(keys, ["c", "python"]);
    }

    #[test]
    fn test_missing_outputs_is_fatal() {
        let err = resolve_str("constants:\n  - name: A\n    value: 1\n").unwrap_err();
        assert!(matches!(err, SpecError::MissingOutputs));
    }

    #[test]
    fn test_empty_document_sections() {
        let project = resolve_str("outputs: {rust: {path: c.rs}}").unwrap();
        assert!(!project.has_enums());
        assert!(!project.has_constants());
    }

    #[test]
    fn test_bad_constant_shape_surfaces() {
        let err = resolve_str(
            "constants:\n  - name: BROKEN\noutputs:\n  c: {path: out.h}\n",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::UnknownConstantShape { .. }));
    }

    #[test]
    fn test_bad_enum_surfaces() {
        let err = resolve_str(
            "enums:\n  - name: Empty\n    values: []\noutputs:\n  c: {path: out.h}\n",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::EmptyEnum { .. }));
    }
}
