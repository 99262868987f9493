use sfc_sourcemap::line_count;

/// Output buffer for an assembled module
///
/// Tracks the 1-based line the next write starts on, so callers can record
/// which module lines a fragment occupies.
pub struct ModuleWriter {
    buffer: String,
    line: u32,
}

impl ModuleWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            line: 1,
        }
    }

    /// Line the next write starts on
    pub fn current_line(&self) -> u32 {
        self.line
    }

    pub fn add_line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self.line += line_count(text);
    }

    /// Append a multi-line fragment, terminated by a line break
    ///
    /// A single trailing line break in `text` is not counted as an extra
    /// line. Returns the half-open range of module lines the fragment covers.
    pub fn add_block(&mut self, text: &str) -> (u32, u32) {
        let text = text
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(text);

        let start = self.line;
        self.add_line(text);
        (start, self.line)
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Default for ModuleWriter {
    fn default() -> Self {
        Self::new()
    }
}
