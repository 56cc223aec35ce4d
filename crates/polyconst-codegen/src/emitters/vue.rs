use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::syntax::SyntaxTable;
use crate::traits::LanguageEmitter;

use super::javascript::JavascriptEmitter;

/// Vue: the javascript output plus a mixin per enum, so components can
/// reach the enum directly from templates.
pub struct VueEmitter {
    inner: JavascriptEmitter,
}

impl VueEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: JavascriptEmitter::new(path),
        }
    }
}

impl LanguageEmitter for VueEmitter {
    fn key(&self) -> &'static str {
        "vue"
    }

    fn output_path(&self) -> &str {
        self.inner.output_path()
    }

    fn syntax(&self) -> &SyntaxTable {
        self.inner.syntax()
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        self.inner.emit_constant(constant)
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let name = def.name();
        let mut out = JavascriptEmitter::enum_block(def);
        out.push_str(&format!(
            "\n{name}.Mixin = {{\n  created () {{\n      this.{name} = {name}\n  }}\n}}\n"
        ));
        out
    }
}
