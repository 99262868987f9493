mod adapter;
mod assemble;
mod config;
mod context;
mod document;
mod error;

pub use adapter::{BlockAdapter, BlockCompiler, CompiledBlock, CompilerRegistry, PassThrough};
pub use assemble::{transform, RenderFunction, TemplateCompiler, TransformOutput};
pub use config::{TransformConfig, DEFAULT_CONFIG_NAME};
pub use context::ModuleWriter;
pub use document::{Document, Section, SectionContent, SectionKind};
pub use error::{CompileError, CompileResult};

// Re-export from sourcemap crate for convenience
pub use sfc_sourcemap::{CompiledScript, Position, RawSourceMap, UnifiedSourceMap};
