pub mod c;
pub mod dart;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod r_lang;
pub mod rust_lang;
pub mod vue;

use polyconst_spec::types::config::TargetConfig;

use crate::error::CodegenError;
use crate::syntax::Inventory;
use crate::traits::LanguageEmitter;

/// Create the emitter registered for the given output key. Adding a
/// language means adding an arm here and a module above; nothing else
/// dispatches on the key.
pub fn create_emitter(
    key: &str,
    cfg: &TargetConfig,
    inventory: Inventory,
) -> Result<Box<dyn LanguageEmitter>, CodegenError> {
    match key {
        "c" => Ok(Box::new(c::CEmitter::new(&cfg.path))),
        "dart" => Ok(Box::new(dart::DartEmitter::new(&cfg.path))),
        "java" => Ok(Box::new(java::JavaEmitter::new(cfg)?)),
        "javascript" => Ok(Box::new(javascript::JavascriptEmitter::new(&cfg.path))),
        "php" => Ok(Box::new(php::PhpEmitter::new(cfg)?)),
        "python" => Ok(Box::new(python::PythonEmitter::new(&cfg.path, inventory))),
        "r" => Ok(Box::new(r_lang::REmitter::new(&cfg.path))),
        "rust" => Ok(Box::new(rust_lang::RustEmitter::new(&cfg.path, inventory))),
        "vue" => Ok(Box::new(vue::VueEmitter::new(&cfg.path))),
        other => Err(CodegenError::UnsupportedLanguage(other.to_string())),
    }
}
