use crate::error::{SourceMapError, SourceMapResult};
use crate::position::Position;
use sourcemap::{SourceMap as ExternalSourceMap, SourceMapBuilder as ExternalBuilder};

/// A mapping held by the builder, already converted to 0-based lines
#[derive(Debug, Clone)]
struct RawMapping {
    dst_line: u32,
    dst_col: u32,
    src: Option<(u32, u32)>,
    name: Option<String>,
}

/// Builder for a single-source map
///
/// Every mapping with an original position points at the one source the
/// builder was created for. Lines passed to the builder are 1-based; the
/// underlying `sourcemap` crate works with 0-based lines.
pub struct SourceMapBuilder {
    source_file: String,
    source_content: Option<String>,
    mappings: Vec<RawMapping>,
}

impl SourceMapBuilder {
    /// Create an empty builder
    ///
    /// # Arguments
    /// * `source_file` - The name every mapping's original position refers to
    pub fn new(source_file: &str) -> Self {
        Self {
            source_file: source_file.to_string(),
            source_content: None,
            mappings: Vec::new(),
        }
    }

    /// Seed a builder with every mapping of an existing map
    ///
    /// Whatever sources `existing` names are collapsed into `source_file`.
    /// Generated and original positions, and symbol names, are carried over
    /// unchanged. `existing` itself is not modified.
    pub fn from_source_map(source_file: &str, existing: &ExternalSourceMap) -> Self {
        let mut builder = Self::new(source_file);
        builder.mappings.reserve(existing.get_token_count() as usize);

        for token in existing.tokens() {
            let src = token
                .get_source()
                .map(|_| (token.get_src_line(), token.get_src_col()));

            builder.mappings.push(RawMapping {
                dst_line: token.get_dst_line(),
                dst_col: token.get_dst_col(),
                src,
                name: token.get_name().map(str::to_string),
            });
        }

        builder
    }

    /// Add a mapping from a generated position to an original position
    ///
    /// Fails with [`SourceMapError::InvalidLine`] when either line is 0.
    pub fn add_mapping(
        &mut self,
        generated: Position,
        original: Position,
        name: Option<&str>,
    ) -> SourceMapResult<()> {
        let dst_line = zero_based("generated", generated.line)?;
        let src_line = zero_based("original", original.line)?;

        self.mappings.push(RawMapping {
            dst_line,
            dst_col: generated.column,
            src: Some((src_line, original.column)),
            name: name.map(str::to_string),
        });
        Ok(())
    }

    /// Attach the text the original positions refer to
    pub fn set_source_content(&mut self, content: &str) {
        self.source_content = Some(content.to_string());
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    /// Build the final source map
    ///
    /// Mappings are emitted in generated order; mappings sharing a generated
    /// position keep the order they were added in.
    pub fn build(self) -> ExternalSourceMap {
        let Self {
            source_file,
            source_content,
            mut mappings,
        } = self;

        let mut builder = ExternalBuilder::new(None);
        let source_id = builder.add_source(&source_file);
        if let Some(content) = source_content.as_deref() {
            builder.set_source_contents(source_id, Some(content));
        }

        mappings.sort_by_key(|m| (m.dst_line, m.dst_col));

        for mapping in &mappings {
            let name_id = mapping.name.as_deref().map(|n| builder.add_name(n));
            match mapping.src {
                Some((src_line, src_col)) => {
                    builder.add_raw(
                        mapping.dst_line,
                        mapping.dst_col,
                        src_line,
                        src_col,
                        Some(source_id),
                        name_id,
                        false,
                    );
                }
                None => {
                    builder.add_raw(mapping.dst_line, mapping.dst_col, 0, 0, None, None, false);
                }
            }
        }

        builder.into_sourcemap()
    }
}

fn zero_based(field: &'static str, line: u32) -> SourceMapResult<u32> {
    line.checked_sub(1)
        .ok_or(SourceMapError::InvalidLine { field, line })
}
