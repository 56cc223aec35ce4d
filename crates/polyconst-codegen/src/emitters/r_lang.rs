use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::SyntaxTable;
use crate::traits::LanguageEmitter;

/// R: `<-` assignments and `#` comments. R has no enum construct, so
/// labels flatten to `ENUM_NAME_LABEL` variables with the enum name
/// upper-snake-cased.
pub struct REmitter {
    path: String,
    syntax: SyntaxTable,
}

impl REmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable {
                comment_mark: "#",
                ..SyntaxTable::default()
            },
        }
    }
}

/// `DeviceKind` -> `DEVICE_KIND`. Computed on a local copy; the shared
/// definition is never renamed.
fn upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push('_');
            out.push(ch);
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out.trim_matches('_').to_string()
}

impl LanguageEmitter for REmitter {
    fn key(&self) -> &'static str {
        "r"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        render::constant_line(constant, &self.syntax, "", " <- ", "")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let prefix = format!("{}_", upper_snake(def.name()));
        render::numbered_lines(def, &prefix, "<-", "")
    }
}
