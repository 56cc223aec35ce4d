use std::path::Path;

use indexmap::IndexMap;

use polyconst_spec::Project;

use crate::emitters;
use crate::error::CodegenError;
use crate::syntax::Inventory;
use crate::traits::LanguageEmitter;

/// Generated files keyed by output path, in target declaration order.
#[derive(Debug, Clone, Default)]
pub struct GeneratedOutput {
    files: IndexMap<String, String>,
}

impl GeneratedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write every file, creating parent directories as needed.
    /// Relative paths land under `base_dir`; absolute paths win over it.
    pub fn write_to_disk(&self, base_dir: &Path) -> Result<(), std::io::Error> {
        for (path, content) in &self.files {
            let full = base_dir.join(path);
            if let Some(parent) = full.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&full, content)?;
        }
        Ok(())
    }
}

/// Drives every configured emitter through the fixed emission sequence.
pub struct Generator {
    emitters: Vec<Box<dyn LanguageEmitter>>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.emitters.iter().map(|e| e.key()).collect();
        f.debug_struct("Generator").field("targets", &keys).finish()
    }
}

impl Generator {
    /// Build one emitter per `outputs` entry, in declaration order.
    /// Fails before any output exists when a target is unsupported or
    /// incomplete.
    pub fn from_project(project: &Project) -> Result<Self, CodegenError> {
        let inventory = Inventory {
            has_enums: project.has_enums(),
            has_constants: project.has_constants(),
        };
        let mut built = Vec::with_capacity(project.outputs.len());
        for (key, cfg) in &project.outputs {
            built.push(emitters::create_emitter(key, cfg, inventory)?);
        }
        Ok(Self { emitters: built })
    }

    /// Header, "constants" comment, every constant, "enums" comment,
    /// every enum, footer - for each target in turn. Constants and
    /// enums keep their declaration order.
    pub fn generate(&self, project: &Project) -> Result<GeneratedOutput, CodegenError> {
        let mut output = GeneratedOutput::new();
        for emitter in &self.emitters {
            let mut text = emitter.emit_header();
            text.push_str(&emitter.emit_comment("constants"));
            for constant in &project.constants {
                text.push_str(&emitter.emit_constant(constant)?);
            }
            text.push_str(&emitter.emit_comment("enums"));
            for def in &project.enums {
                text.push_str(&emitter.emit_enum(def));
            }
            text.push_str(&emitter.emit_footer());
            output.add_file(emitter.output_path(), text);
        }
        Ok(output)
    }

    pub fn emitters(&self) -> &[Box<dyn LanguageEmitter>] {
        &self.emitters
    }
}
