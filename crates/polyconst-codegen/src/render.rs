use polyconst_spec::types::common::LiteralValue;
use polyconst_spec::types::constant::{Constant, ConstantBody, OpKind, Operand, Operation};
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::syntax::{OpMarks, SyntaxTable};

/// Render one operand. Concat wraps literals in the variant's string
/// delimiter; arithmetic kinds take the bare token; references pass
/// through verbatim.
fn operand_token(operand: &Operand, kind: OpKind, delimiter: &str) -> String {
    match operand {
        Operand::Literal { value } => {
            if kind == OpKind::Concat {
                format!("{delimiter}{}{delimiter}", value.bare_token())
            } else {
                value.bare_token()
            }
        }
        Operand::Ref { name } => name.clone(),
    }
}

/// A flat infix chain: prefix, operands joined by the infix token in
/// declared order, suffix. No precedence handling, no recursion.
pub fn render_operation(op: &Operation, marks: &OpMarks, delimiter: &str) -> String {
    let joined = op
        .operands
        .iter()
        .map(|operand| operand_token(operand, op.kind, delimiter))
        .collect::<Vec<_>>()
        .join(marks.infix);
    format!("{}{joined}{}", marks.prefix, marks.suffix)
}

/// The right-hand side of a literal constant: integers bare, strings
/// wrapped in the variant's delimiter. Floats have no standalone
/// rendering; they are only reachable through operations.
pub fn literal_token(
    name: &str,
    value: &LiteralValue,
    delimiter: &str,
) -> Result<String, CodegenError> {
    match value {
        LiteralValue::Int(i) => Ok(i.to_string()),
        LiteralValue::Str(s) => Ok(format!("{delimiter}{s}{delimiter}")),
        LiteralValue::Float(_) => Err(CodegenError::IllegalConstantType {
            name: name.to_string(),
            value_type: value.value_type(),
        }),
    }
}

/// One constant declaration line. The caller supplies the declaration
/// wrapping; value rendering comes from the syntax table.
pub fn constant_line(
    constant: &Constant,
    syntax: &SyntaxTable,
    prefix: &str,
    assignment: &str,
    suffix: &str,
) -> Result<String, CodegenError> {
    let rendered = match &constant.body {
        ConstantBody::Literal(value) => {
            literal_token(&constant.name, value, syntax.string_delimiter)?
        }
        ConstantBody::Operation(op) => {
            render_operation(op, syntax.marks(op.kind), syntax.string_delimiter)
        }
    };
    Ok(format!("{prefix}{}{assignment}{rendered}{suffix}\n", constant.name))
}

/// Positionally numbered enum lines, the shared body behind the python,
/// javascript and r variants.
pub fn numbered_lines(def: &EnumDef, prefix: &str, assignment: &str, suffix: &str) -> String {
    let mut out = String::new();
    for (i, label) in def.values().iter().enumerate() {
        out.push_str(&format!("{prefix}{label} {assignment} {i}{suffix}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyconst_spec::types::common::ValueType;

    fn concat_op() -> Operation {
        Operation {
            kind: OpKind::Concat,
            operands: vec![
                Operand::Literal {
                    value: LiteralValue::Str("a".to_string()),
                },
                Operand::Ref {
                    name: "GREETING".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_render_concat_wraps_literals() {
        let rendered = render_operation(&concat_op(), &OpMarks::plain(" + "), "\"");
        assert_eq!(rendered, "\"a\" + GREETING");
    }

    #[test]
    fn test_render_concat_with_wrapper_marks() {
        let marks = OpMarks {
            prefix: "concatcp!(",
            infix: ",",
            suffix: ")",
        };
        let rendered = render_operation(&concat_op(), &marks, "\"");
        assert_eq!(rendered, "concatcp!(\"a\",GREETING)");
    }

    #[test]
    fn test_render_arithmetic_keeps_bare_tokens() {
        let op = Operation {
            kind: OpKind::Sum,
            operands: vec![
                Operand::Literal {
                    value: LiteralValue::Int(1),
                },
                Operand::Ref {
                    name: "RETRY_LIMIT".to_string(),
                },
                Operand::Literal {
                    value: LiteralValue::Float(2.5),
                },
            ],
        };
        let rendered = render_operation(&op, &OpMarks::plain(" + "), "\"");
        assert_eq!(rendered, "1 + RETRY_LIMIT + 2.5");
    }

    #[test]
    fn test_literal_token_int_and_str() {
        assert_eq!(
            literal_token("N", &LiteralValue::Int(5), "\"").unwrap(),
            "5"
        );
        assert_eq!(
            literal_token("S", &LiteralValue::Str("hi".to_string()), "'").unwrap(),
            "'hi'"
        );
    }

    #[test]
    fn test_literal_token_rejects_float() {
        let err = literal_token("PI", &LiteralValue::Float(3.14), "\"").unwrap_err();
        let CodegenError::IllegalConstantType { name, value_type } = err else {
            panic!("expected IllegalConstantType");
        };
        assert_eq!(name, "PI");
        assert_eq!(value_type, ValueType::Float);
    }

    #[test]
    fn test_constant_line_wrapping() {
        let c = Constant::literal("GREETING", LiteralValue::Str("hi".to_string()));
        let line = constant_line(&c, &SyntaxTable::default(), "export const ", " = ", "").unwrap();
        assert_eq!(line, "export const GREETING = \"hi\"\n");
    }

    #[test]
    fn test_numbered_lines() {
        let def = EnumDef::new(
            "Color",
            vec!["RED".to_string(), "GREEN".to_string(), "BLUE".to_string()],
        )
        .unwrap();
        assert_eq!(
            numbered_lines(&def, "\t", ":", ","),
            "\tRED : 0,\n\tGREEN : 1,\n\tBLUE : 2,\n"
        );
    }
}
