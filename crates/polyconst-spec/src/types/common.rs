use serde::{Deserialize, Serialize};

/// A literal scalar carried by an operand or a literal constant.
///
/// Deserialized untagged, so YAML `5`, `2.5` and `"hi"` land in the
/// matching variant at parse time and no rendering code ever has to
/// inspect a value's runtime type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl LiteralValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            LiteralValue::Int(_) => ValueType::Int,
            LiteralValue::Float(_) => ValueType::Float,
            LiteralValue::Str(_) => ValueType::Str,
        }
    }

    /// The bare source token for this literal, without any quoting.
    /// Whole floats keep one decimal place so they stay float tokens
    /// in the emitted language.
    pub fn bare_token(&self) -> String {
        match self {
            LiteralValue::Int(i) => i.to_string(),
            LiteralValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    f.to_string()
                }
            }
            LiteralValue::Str(s) => s.clone(),
        }
    }
}

/// The inferred result type of a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float,
    Str,
}
