use crate::document::SectionKind;
use sfc_sourcemap::SourceMapError;
use std::path::PathBuf;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Error, Debug)]
pub enum CompileError {
    /// Failure reported by a block or template compiler, passed on as is
    #[error(transparent)]
    Block(#[from] anyhow::Error),

    #[error("No compiler registered for language '{lang}' ({kind} section)")]
    UnknownLanguage { lang: String, kind: SectionKind },

    #[error("Failed to read {} referenced by {}: {source}", .path.display(), .document.display())]
    ExternalSource {
        path: PathBuf,
        document: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    SourceMap(#[from] SourceMapError),
}
