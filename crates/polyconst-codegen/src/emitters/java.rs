use std::path::Path;

use polyconst_spec::types::common::ValueType;
use polyconst_spec::types::config::TargetConfig;
use polyconst_spec::types::constant::Constant;
use polyconst_spec::types::enum_def::EnumDef;

use crate::error::CodegenError;
use crate::render;
use crate::syntax::SyntaxTable;
use crate::traits::{autogen_line, LanguageEmitter};

/// Java: everything wrapped in a `public final class` named after the
/// output file, typed `public static final` constants, one nested enum
/// per definition. The `package` key is required; an empty value omits
/// the declaration.
pub struct JavaEmitter {
    path: String,
    syntax: SyntaxTable,
    package: String,
}

impl JavaEmitter {
    pub fn new(cfg: &TargetConfig) -> Result<Self, CodegenError> {
        let package = cfg.package.clone().ok_or(CodegenError::MissingTargetField {
            language: "java",
            field: "package",
        })?;
        Ok(Self {
            path: cfg.path.clone(),
            syntax: SyntaxTable {
                comment_indent: 1,
                ..SyntaxTable::default()
            },
            package,
        })
    }

    /// Wrapping class name: base name of the output path with the
    /// `.java` suffix stripped.
    fn class_name(&self) -> String {
        let base = Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone());
        match base.strip_suffix(".java") {
            Some(stem) => stem.to_string(),
            None => base,
        }
    }

    fn type_name(value_type: ValueType) -> &'static str {
        match value_type {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "String",
        }
    }
}

impl LanguageEmitter for JavaEmitter {
    fn key(&self) -> &'static str {
        "java"
    }

    fn output_path(&self) -> &str {
        &self.path
    }

    fn syntax(&self) -> &SyntaxTable {
        &self.syntax
    }

    fn emit_header(&self) -> String {
        let mut header = autogen_line(&self.syntax);
        if !self.package.is_empty() {
            header.push_str(&format!("package {};\n\n", self.package));
        }
        header.push_str(&format!("public final class {} {{\n", self.class_name()));
        header
    }

    fn emit_footer(&self) -> String {
        "\n}".to_string()
    }

    fn emit_constant(&self, constant: &Constant) -> Result<String, CodegenError> {
        let prefix = format!(
            "\tpublic static final {} ",
            Self::type_name(constant.result_type())
        );
        render::constant_line(constant, &self.syntax, &prefix, " = ", ";")
    }

    fn emit_enum(&self, def: &EnumDef) -> String {
        let body = def.values().join(", \n\t\t");
        format!("\tpublic enum {} {{\n\t\t{body}\n\t}}\n", def.name())
    }
}
