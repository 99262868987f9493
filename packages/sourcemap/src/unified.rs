use crate::error::{SourceMapError, SourceMapResult};
use crate::position::{Mapping, Position};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sourcemap::SourceMap;

/// A source map covering a whole generated module
///
/// Holds exactly one source. Positions exposed here follow [`Position`]'s
/// 1-based line convention.
#[derive(Debug, Clone)]
pub struct UnifiedSourceMap {
    map: SourceMap,
}

impl UnifiedSourceMap {
    pub(crate) fn new(map: SourceMap) -> Self {
        Self { map }
    }

    /// Name of the single source
    pub fn source(&self) -> Option<&str> {
        self.map.get_source(0)
    }

    /// Embedded text of the single source
    pub fn source_content(&self) -> Option<&str> {
        self.map.get_source_contents(0)
    }

    pub fn mapping_count(&self) -> usize {
        self.map.get_token_count() as usize
    }

    /// All mappings in generated order
    pub fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        self.map.tokens().map(|token| Mapping {
            generated: Position::new(token.get_dst_line() + 1, token.get_dst_col()),
            original: token
                .get_source()
                .map(|_| Position::new(token.get_src_line() + 1, token.get_src_col())),
            name: token.get_name().map(str::to_string),
        })
    }

    /// Mappings whose generated position is on `line`
    pub fn mappings_on_line(&self, line: u32) -> Vec<Mapping> {
        self.mappings()
            .filter(|m| m.generated.line == line)
            .collect()
    }

    pub fn has_mapping(&self, generated: Position, original: Position) -> bool {
        self.mappings()
            .any(|m| m.generated == generated && m.original == Some(original))
    }

    pub fn as_source_map(&self) -> &SourceMap {
        &self.map
    }

    pub fn into_source_map(self) -> SourceMap {
        self.map
    }

    /// Serialize to v3 JSON
    pub fn to_json(&self) -> SourceMapResult<String> {
        let mut buf = Vec::new();
        self.map.to_writer(&mut buf).map_err(SourceMapError::Encode)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Serialize to a `data:` URL suitable for a `sourceMappingURL` comment
    pub fn to_data_url(&self) -> SourceMapResult<String> {
        let json = self.to_json()?;
        Ok(format!(
            "data:application/json;charset=utf-8;base64,{}",
            STANDARD.encode(json)
        ))
    }
}
