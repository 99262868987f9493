use thiserror::Error;

pub type SourceMapResult<T> = Result<T, SourceMapError>;

#[derive(Error, Debug)]
pub enum SourceMapError {
    /// The map handed over by a block compiler could not be decoded
    #[error("Malformed source map: {0}")]
    Malformed(#[source] sourcemap::Error),

    #[error("Invalid {field} line {line}: lines are 1-based")]
    InvalidLine { field: &'static str, line: u32 },

    #[error("Failed to encode source map: {0}")]
    Encode(#[source] sourcemap::Error),

    #[error("Encoded source map is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
