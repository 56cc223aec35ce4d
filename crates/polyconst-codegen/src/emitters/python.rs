use polyconst_spec::types::enum_def::EnumDef;

use crate::render;
use crate::syntax::{Inventory, SyntaxTable};
use crate::traits::{autogen_line, LanguageEmitter};

/// Python: `#` comments, single-quoted strings, enums as `enum.Enum`
/// subclasses. The stdlib import is only emitted when an enum exists.
pub struct PythonEmitter {
    path: String,
    syntax: SyntaxTable,
    has_enums: bool,
}

impl PythonEmitter {
    pub fn new(path: impl Into<String>, inventory: Inventory) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable {
                comment_mark: "#",
                string_delimiter: "'",
                ..SyntaxTable::default()
            },
            has_enums: inventory.has_enums,
        }
    }
}

impl LanguageEmitter for PythonEmitter {
    fn key(&self) -> &'static str {
        "python"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let mut header = autogen_line(&self.syntax);
        if self.has_enums {
            header.push_str("from enum import Enum\n");
        }
        header
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let mut out = format!("class {}(Enum):\n", def.name());
        out.push_str(&render::numbered_lines(def, "\t", "=", ""));
        out.push('\n');
        out
    }
}
