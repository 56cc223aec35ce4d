use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::SyntaxTable;

/// Language-specific emitter: one instance per requested target.
///
/// The default method bodies implement the shared rendering scheme in
/// terms of the variant's `SyntaxTable`; variants override only where
/// their syntax needs more than token substitution.
pub trait LanguageEmitter {
    /// Registry key of this variant ("c", "java", ...).
    fn key(&self) -> &'static str;

    /// Destination path this emitter's output is written to.
    fn output_path(&self) -> &str;

    /// The variant's syntax parameter table.
    fn syntax(&self) -> &SyntaxTable;

    /// The fixed autogenerated marker plus any variant preamble.
    fn emit_header(&self) -> String {
        autogen_line(self.syntax())
    }

    /// Variant closing material; nothing by default.
    fn emit_footer(&self) -> String {
        String::new()
    }

    /// A blank line, then an indented single-line comment.
    fn emit_comment(&self, text: &str) -> String {
        let syntax = self.syntax();
        let indent = "\t".repeat(syntax.comment_indent);
        format!("\n{indent}{} {text}\n", syntax.comment_mark)
    }

    /// One constant declaration line.
    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        render::constant_line(constant, self.syntax(), "", " = ", "")
    }

    /// One enum declaration; bare positional assignments by default.
    fn emit_enum(&self, def: &EnumDef) -> String {
        render::numbered_lines(def, "", "=", "")
    }
}

/// The first thing every variant writes, in its own comment syntax.
pub fn autogen_line(syntax: &SyntaxTable) -> String {
    format!("{} autogenerated by polyconst - do not edit!\n", syntax.comment_mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyconst_spec::types::common::LiteralValue;
    use polyconst_spec::types::constant::{OpKind, Operand};

    /// A variant with no overrides at all; exercises the defaults.
    struct PlainEmitter {
        syntax: SyntaxTable,
    }

    impl PlainEmitter {
        fn new() -> Self {
            Self {
                syntax: SyntaxTable::default(),
            }
        }
    }

    impl LanguageEmitter for PlainEmitter {
        fn key(&self) -> &'static str {
            "plain"
        }

        fn output_path(&self) -> &str {
            "out.txt"
        }

        fn syntax(&self) -> &SyntaxTable {
            &self.syntax
        }
    }

    #[test]
    fn test_default_header_is_the_autogen_line() {
        let emitter = PlainEmitter::new();
        assert_eq!(
            emitter.emit_header(),
            "// autogenerated by polyconst - do not edit!\n"
        );
    }

    #[test]
    fn test_default_footer_is_empty() {
        assert_eq!(PlainEmitter::new().emit_footer(), "");
    }

    #[test]
    fn test_default_comment() {
        assert_eq!(PlainEmitter::new().emit_comment("constants"), "\n// constants\n");
    }

    #[test]
    fn test_comment_honors_indent() {
        struct Indented(SyntaxTable);
        impl LanguageEmitter for Indented {
            fn key(&self) -> &'static str {
                "indented"
            }
            fn output_path(&self) -> &str {
                "out.txt"
            }
            fn syntax(&self) -> &SyntaxTable {
                &self.0
            }
        }

        let emitter = Indented(SyntaxTable {
            comment_indent: 1,
            ..SyntaxTable::default()
        });
        assert_eq!(emitter.emit_comment("enums"), "\n\t// enums\n");
    }

    #[test]
    fn test_default_constant_line() {
        let emitter = PlainEmitter::new();
        let c = Constant::literal("RETRY_LIMIT", LiteralValue::Int(5));
        assert_eq!(emitter.emit_constant(&c).unwrap(), "RETRY_LIMIT = 5\n");
    }

    #[test]
    fn test_default_operation_line() {
        let emitter = PlainEmitter::new();
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
        assert_eq!(emitter.emit_constant(&c).unwrap(), "FULL = \"a\" + GREETING\n");
    }

    #[test]
    fn test_default_enum_numbering() {
        let emitter = PlainEmitter::new();
        let def = EnumDef::new("Color", vec!["RED".to_string(), "GREEN".to_string()]).unwrap();
        assert_eq!(emitter.emit_enum(&def), "RED = 0\nGREEN = 1\n");
    }
}
