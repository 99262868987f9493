use std::fmt;

/// A location in generated or original text
///
/// Lines are 1-based and columns 0-based, the convention used by coverage
/// tools and devtools when they talk about mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Column 0 of `line`
    pub const fn line_start(line: u32) -> Self {
        Self { line, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One generated → original correspondence of a unified map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub generated: Position,
    /// `None` for generated segments with no original text
    pub original: Option<Position>,
    pub name: Option<String>,
}
