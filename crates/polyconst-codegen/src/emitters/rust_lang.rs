use polyconst_spec::types::common::ValueType;
use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::{Inventory, OpMarks, SyntaxTable};
use crate::traits::{autogen_line, LanguageEmitter};

/// Rust: typed `pub const` items. `&str` has no const `+`, so
/// concatenation goes through const_format's `concatcp!`; the import is
/// only emitted when a constant exists to use it.
pub struct RustEmitter {
    path: String,
    syntax: SyntaxTable,
    has_constants: bool,
}

impl RustEmitter {
    pub fn new(path: impl Into<String>, inventory: Inventory) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable {
                concat: OpMarks {
                    prefix: "concatcp!(",
                    infix: ",",
                    suffix: ")",
                },
                ..SyntaxTable::default()
            },
            has_constants: inventory.has_constants,
        }
    }

    fn type_name(value_type: ValueType) -> &'static str {
        match value_type {
            ValueType::Int => "i32",
            ValueType::Float => "f32",
            ValueType::Str => "&str",
        }
    }
}

impl LanguageEmitter for RustEmitter {
    fn key(&self) -> &'static str {
        "rust"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let mut header = autogen_line(&self.syntax);
        if self.has_constants {
            header.push_str("use const_format::concatcp;\n");
        }
        header
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        let assignment = format!(": {} = ", Self::type_name(constant.result_type()));
        render::constant_line(constant, &self.syntax, "pub const ", &assignment, ";")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let body = def.values().join(", \n\t");
        format!("pub enum {} {{\n\t{body}\n}}\n", def.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyconst_spec::types::common::LiteralValue;
    use polyconst_spec::types::constant::{OpKind, Operand};

    fn emitter() -> RustEmitter {
        RustEmitter::new(
            "constants.rs",
            Inventory {
                has_enums: true,
                has_constants: true,
            },
        )
    }

    #[test]
    fn test_header_imports_concatcp_only_with_constants() {
        assert_eq!(
            emitter().emit_header(),
            "// autogenerated by polyconst - do not edit!\nuse const_format::concatcp;\n"
        );

        let bare = RustEmitter::new("constants.rs", Inventory::default());
        assert_eq!(
            bare.emit_header(),
            "// autogenerated by polyconst - do not edit!\n"
        );
    }

    #[test]
    fn test_constants_carry_their_type() {
        let c = Constant::literal("RETRY_LIMIT", LiteralValue::Int(5));
        assert_eq!(
            emitter().emit_constant(&c).unwrap(),
            "pub const RETRY_LIMIT: i32 = 5;\n"
        );

        let c = Constant::literal("GREETING", LiteralValue::Str("hi".to_string()));
        assert_eq!(
            emitter().emit_constant(&c).unwrap(),
            "pub const GREETING: &str = \"hi\";\n"
        );
    }

    #[test]
    fn test_concat_goes_through_concatcp() {
        let c = Constant::operation(
            "FULL",
            OpKind::Concat,
            vec![
                Operand::Literal {
                    value: LiteralValue::Str("a".to_string()),
                },
                Operand::Ref {
                    name: "GREETING".to_string(),
                },
            ],
        )
        .unwrap();
        assert_eq!(
            emitter().emit_constant(&c).unwrap(),
            "pub const FULL: &str = concatcp!(\"a\",GREETING);\n"
        );
    }

    #[test]
    fn test_arithmetic_stays_infix() {
        let c = Constant::operation(
            "TOTAL",
            OpKind::Sum,
            vec![
                Operand::Literal {
                    value: LiteralValue::Int(1),
                },
                Operand::Ref {
                    name: "RETRY_LIMIT".to_string(),
                },
            ],
        )
        .unwrap();
        assert_eq!(
            emitter().emit_constant(&c).unwrap(),
            "pub const TOTAL: i32 = 1 + RETRY_LIMIT;\n"
        );
    }

    #[test]
    fn test_enum_declaration() {
        let def = EnumDef::new(
            "Color",
            vec!["RED".to_string(), "GREEN".to_string(), "BLUE".to_string()],
        )
        .unwrap();
        assert_eq!(
            emitter().emit_enum(&def),
            "pub enum Color {\n\tRED, \n\tGREEN, \n\tBLUE\n}\n"
        );
    }
}
