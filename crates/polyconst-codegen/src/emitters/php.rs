use polyconst_spec::types::config::TargetConfig;
use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::{OpMarks, SyntaxTable};
use crate::traits::{autogen_line, LanguageEmitter};

/// PHP: `Define()` constants, native `enum` declarations, dot
/// concatenation, single-quoted strings. The `namespace` key is
/// required; an empty value omits the declaration.
pub struct PhpEmitter {
    path: String,
    syntax: SyntaxTable,
    namespace: String,
}

impl PhpEmitter {
    pub fn new(cfg: &TargetConfig) -> Result<Self, CodegenError> {
        let namespace = cfg
            .namespace
            .clone()
            .ok_or(CodegenError::MissingTargetField {
                language: "php",
                field: "namespace",
            })?;
        Ok(Self {
            path: cfg.path.clone(),
            syntax: SyntaxTable {
                string_delimiter: "'",
                concat: OpMarks::plain("."),
                ..SyntaxTable::default()
            },
            namespace,
        })
    }
}

impl LanguageEmitter for PhpEmitter {
    fn key(&self) -> &'static str {
        "php"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let mut header = String::from("<?php\n");
        header.push_str(&autogen_line(&self.syntax));
        if !self.namespace.is_empty() {
            header.push_str(&format!("namespace {};\n", self.namespace));
        }
        header
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        render::constant_line(constant, &self.syntax, "Define('", "', ", ");")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let cases = def.values().join(";\n\tcase ");
        format!("enum {} {{\n\tcase {cases};\n}}\n", def.name())
    }
}
