use crate::error::{SourceMapError, SourceMapResult};
use sourcemap::{DecodedMap, SourceMap};

/// Source map data exactly as a block compiler produced it
///
/// The data is only decoded when a unified map is synthesized from it, so a
/// malformed map surfaces as an error of that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSourceMap {
    json: String,
}

impl RawSourceMap {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    /// Serialize an already-built map
    pub fn from_source_map(map: &SourceMap) -> SourceMapResult<Self> {
        let mut buf = Vec::new();
        map.to_writer(&mut buf).map_err(SourceMapError::Encode)?;
        Ok(Self {
            json: String::from_utf8(buf)?,
        })
    }

    pub fn as_json(&self) -> &str {
        &self.json
    }

    /// Decode into a regular map
    ///
    /// Indexed (sectioned) maps are flattened and Hermes maps lose their
    /// function metadata.
    pub fn decode(&self) -> SourceMapResult<SourceMap> {
        match sourcemap::decode_slice(self.json.as_bytes()).map_err(SourceMapError::Malformed)? {
            DecodedMap::Regular(map) => Ok(map),
            DecodedMap::Index(index) => index.flatten().map_err(SourceMapError::Malformed),
            DecodedMap::Hermes(hermes) => Ok((*hermes).clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_regular_map() {
        let raw = RawSourceMap::from_json(
            r#"{"version":3,"sources":["Basic.ts"],"names":[],"mappings":"AAAA;AACA"}"#,
        );

        let map = raw.decode().unwrap();
        assert_eq!(map.get_source(0), Some("Basic.ts"));
        assert_eq!(map.get_token_count(), 2);
    }

    #[test]
    fn test_decode_indexed_map() {
        let raw = RawSourceMap::from_json(
            r#"{
                "version": 3,
                "sections": [
                    {
                        "offset": { "line": 0, "column": 0 },
                        "map": { "version": 3, "sources": ["a.ts"], "names": [], "mappings": "AAAA" }
                    },
                    {
                        "offset": { "line": 2, "column": 0 },
                        "map": { "version": 3, "sources": ["b.ts"], "names": [], "mappings": "AACA" }
                    }
                ]
            }"#,
        );

        let map = raw.decode().unwrap();
        assert_eq!(map.get_token_count(), 2);

        let first = map.lookup_token(0, 0).unwrap();
        assert_eq!(first.get_dst_line(), 0);
        assert_eq!(first.get_source(), Some("a.ts"));

        let second = map.lookup_token(2, 0).unwrap();
        assert_eq!(second.get_dst_line(), 2);
        assert_eq!(second.get_source(), Some("b.ts"));
        assert_eq!(second.get_src_line(), 1);
    }

    #[test]
    fn test_decode_hermes_map() {
        let raw = RawSourceMap::from_json(
            r#"{"version":3,"sources":["Basic.js"],"names":[],"mappings":"AAAA","x_facebook_sources":[null]}"#,
        );

        let map = raw.decode().unwrap();
        assert_eq!(map.get_source(0), Some("Basic.js"));
        assert_eq!(map.get_token_count(), 1);
    }

    #[test]
    fn test_decode_malformed_map() {
        let raw = RawSourceMap::from_json("{ not a map");
        assert!(matches!(raw.decode(), Err(SourceMapError::Malformed(_))));
    }

    #[test]
    fn test_from_source_map() {
        let mut builder = sourcemap::SourceMapBuilder::new(None);
        let id = builder.add_source("Basic.ts");
        builder.add_raw(0, 0, 0, 0, Some(id), None, false);
        let map = builder.into_sourcemap();

        let raw = RawSourceMap::from_source_map(&map).unwrap();
        assert!(raw.as_json().contains("Basic.ts"));
        assert_eq!(raw.decode().unwrap().get_token_count(), 1);
    }
}
