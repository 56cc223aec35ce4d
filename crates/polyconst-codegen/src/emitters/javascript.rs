use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::SyntaxTable;
use crate::traits::LanguageEmitter;

/// JavaScript: `export const` declarations, enums as exported object
/// maps from label to positional code.
pub struct JavascriptEmitter {
    path: String,
    syntax: SyntaxTable,
}

impl JavascriptEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable::default(),
        }
    }

    /// The object-map block, shared with the vue variant which appends
    /// to it.
    pub(crate) fn enum_block(def: &EnumDef) -> String {
        let mut out = format!("export const {} = {{\n", def.name());
        out.push_str(&render::numbered_lines(def, "\t", ":", ","));
        out.push_str("}\n");
        out
    }
}

impl LanguageEmitter for JavascriptEmitter {
    fn key(&self) -> &'static str {
        "javascript"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        render::constant_line(constant, &self.syntax, "export const ", " = ", "")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        Self::enum_block(def)
    }
}
