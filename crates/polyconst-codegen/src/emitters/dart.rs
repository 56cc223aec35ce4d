use polyconst_spec::types::enum_def::EnumDef;

use crate::syntax::SyntaxTable;
use crate::traits::{autogen_line, LanguageEmitter};

/// Dart: a `library` header and enums with lower-cased variant names,
/// matching Dart naming style.
pub struct DartEmitter {
    path: String,
    syntax: SyntaxTable,
}

impl DartEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable::default(),
        }
    }
}

impl LanguageEmitter for DartEmitter {
    fn key(&self) -> &'static str {
        "dart"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let mut header = autogen_line(&self.syntax);
        header.push_str("library constants;\n\n");
        header
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let body = def
            .values()
            .iter()
            .map(|label| label.to_lowercase())
            .collect::<Vec<_>>()
            .join(",\n\t");
        format!("enum {} {{\n\t{body},\n}}\n", def.name())
    }
}
