use serde::Deserialize;

use super::common::{LiteralValue, ValueType};
use super::config::RawConstant;
use super::error::SpecError;

/// One term of an operation: a literal scalar or a reference to another
/// constant's name. References are emitted verbatim, never resolved or
/// type-checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Literal {
        value: LiteralValue,
    },
    Ref {
        #[serde(rename = "ref")]
        name: String,
    },
}

impl Operand {
    pub fn literal(&self) -> Option<&LiteralValue> {
        match self {
            Operand::Literal { value } => Some(value),
            Operand::Ref { .. } => None,
        }
    }
}

/// The five derived-constant operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Concat,
    Sum,
    Sub,
    Mul,
    Div,
}

impl OpKind {
    /// The document key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            OpKind::Concat => "concat",
            OpKind::Sum => "sum",
            OpKind::Sub => "sub",
            OpKind::Mul => "mul",
            OpKind::Div => "div",
        }
    }
}

/// A derived-constant computation over an ordered operand list. Operand
/// order is left-to-right placement in the emitted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OpKind,
    pub operands: Vec<Operand>,
}

impl Operation {
    /// Result type of the operation: the first operand carrying a
    /// literal decides. `None` when no operand has one.
    pub fn result_type(&self) -> Option<ValueType> {
        self.operands
            .iter()
            .find_map(Operand::literal)
            .map(LiteralValue::value_type)
    }
}

/// The body of a constant: a literal value or exactly one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantBody {
    Literal(LiteralValue),
    Operation(Operation),
}

/// A named constant. Immutable once built; shared read-only by every
/// emitter in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub body: ConstantBody,
    result_type: ValueType,
}

impl Constant {
    pub fn literal(name: impl Into<String>, value: LiteralValue) -> Self {
        let result_type = value.value_type();
        Self {
            name: name.into(),
            body: ConstantBody::Literal(value),
            result_type,
        }
    }

    pub fn operation(
        name: impl Into<String>,
        kind: OpKind,
        operands: Vec<Operand>,
    ) -> Result<Self, SpecError> {
        let name = name.into();
        let op = Operation { kind, operands };
        let Some(result_type) = op.result_type() else {
            return Err(SpecError::UntypedOperation { name });
        };
        Ok(Self {
            name,
            body: ConstantBody::Operation(op),
            result_type,
        })
    }

    /// Build a constant from its raw document entry. The `value` key
    /// wins over operation keys; operation keys are checked in the
    /// order concat, sum, sub, mul, div.
    pub fn from_raw(raw: RawConstant) -> Result<Self, SpecError> {
        let RawConstant {
            name,
            value,
            concat,
            sum,
            sub,
            mul,
            div,
        } = raw;

        if let Some(value) = value {
            return Ok(Self::literal(name, value));
        }

        let op_keys = [
            (OpKind::Concat, concat),
            (OpKind::Sum, sum),
            (OpKind::Sub, sub),
            (OpKind::Mul, mul),
            (OpKind::Div, div),
        ];
        for (kind, operands) in op_keys {
            if let Some(operands) = operands {
                return Self::operation(name, kind, operands);
            }
        }

        Err(SpecError::UnknownConstantShape { name })
    }

    /// Inferred result type: the literal's own type, or the type of the
    /// operation's first literal-bearing operand.
    pub fn result_type(&self) -> ValueType {
        self.result_type
    }
}
