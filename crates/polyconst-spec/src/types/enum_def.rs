use std::collections::HashSet;

use super::error::SpecError;

/// A named ordered set of labels. The position of each label is its
/// implicit numeric code; emitters must never reorder or rename the
/// shared definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    name: String,
    values: Vec<String>,
}

impl EnumDef {
    /// Validates the invariants the document format itself does not
    /// enforce: at least one label, no duplicate labels.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Result<Self, SpecError> {
        let name = name.into();
        if values.is_empty() {
            return Err(SpecError::EmptyEnum { name });
        }
        let mut seen = HashSet::new();
        for label in &values {
            if !seen.insert(label.as_str()) {
                return Err(SpecError::DuplicateEnumLabel {
                    name,
                    label: label.clone(),
                });
            }
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
