//! Source maps for compiled single-file components
//!
//! A component document is compiled into one module: the output of its
//! script compiler followed by the render function generated from its
//! template. [`synthesize`] builds the single source map for that module,
//! pointing every mapped line back into the document (or into the external
//! file a script's `src` referenced).

pub mod builder;
pub mod error;
pub mod position;
pub mod provenance;
pub mod raw;
pub mod synthesize;
pub mod unified;
pub mod utils;

pub use builder::SourceMapBuilder;
pub use error::{SourceMapError, SourceMapResult};
pub use position::{Mapping, Position};
pub use provenance::{CompiledScript, ScriptProvenance};
pub use raw::RawSourceMap;
pub use synthesize::synthesize;
pub use unified::UnifiedSourceMap;
pub use utils::{base_name, line_count, split_lines};
