use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::{OpMarks, SyntaxTable};
use crate::traits::{autogen_line, LanguageEmitter};

/// C: preprocessor constants inside an include guard derived from the
/// output path, enums as `typedef enum`. String concatenation is
/// adjacent-literal juxtaposition.
pub struct CEmitter {
    path: String,
    syntax: SyntaxTable,
}

impl CEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            syntax: SyntaxTable {
                concat: OpMarks::plain(" "),
                ..SyntaxTable::default()
            },
        }
    }

    /// `include/app/out.h` -> `INCLUDE_APP_OUT_H`.
    fn guard_name(&self) -> String {
        self.path.replace('/', "_").replace('.', "_").to_uppercase()
    }
}

impl LanguageEmitter for CEmitter {
    fn key(&self) -> &'static str {
        "c"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let guard = self.guard_name();
        let mut header = autogen_line(&self.syntax);
        header.push_str(&format!("#ifndef {guard}\n#define {guard}\n"));
        header
    }

    fn emit_footer(&self) -> String {
        format!("\n#endif /* {} */", self.guard_name())
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        render::constant_line(constant, &self.syntax, "#define ", " ", "")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        format!(
            "typedef enum {{ {} }} {};\n",
            def.values().join(", "),
            def.name()
        )
    }
}
