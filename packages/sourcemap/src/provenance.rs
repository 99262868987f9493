use crate::raw::RawSourceMap;

/// Normalized output of compiling a document's script section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledScript {
    /// Generated code
    pub code: String,
    /// Map supplied by the script's compiler, if it produced one
    pub map: Option<RawSourceMap>,
    /// Text of the referenced file when the section used `src`
    ///
    /// When set, line numbers in `map` refer to this text rather than to the
    /// document.
    pub external_src: Option<String>,
}

impl CompiledScript {
    pub fn inline(code: impl Into<String>, map: Option<RawSourceMap>) -> Self {
        Self {
            code: code.into(),
            map,
            external_src: None,
        }
    }

    pub fn external(
        code: impl Into<String>,
        map: Option<RawSourceMap>,
        external_src: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            map,
            external_src: Some(external_src.into()),
        }
    }

    pub fn provenance(&self) -> ScriptProvenance<'_> {
        match &self.external_src {
            Some(content) => ScriptProvenance::External {
                code: &self.code,
                map: self.map.as_ref(),
                content,
            },
            None => ScriptProvenance::Inline {
                code: &self.code,
                map: self.map.as_ref(),
            },
        }
    }
}

/// Where the script of a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptProvenance<'a> {
    /// The document has no script section
    None,
    /// Script text lives in the document itself
    Inline {
        code: &'a str,
        map: Option<&'a RawSourceMap>,
    },
    /// Script text was loaded from the file a `src` attribute referenced
    External {
        code: &'a str,
        map: Option<&'a RawSourceMap>,
        content: &'a str,
    },
}

impl<'a> ScriptProvenance<'a> {
    pub fn of(script: Option<&'a CompiledScript>) -> Self {
        script.map_or(ScriptProvenance::None, CompiledScript::provenance)
    }

    pub fn is_external(&self) -> bool {
        matches!(self, ScriptProvenance::External { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_script() {
        assert_eq!(ScriptProvenance::of(None), ScriptProvenance::None);
    }

    #[test]
    fn test_inline_script() {
        let script = CompiledScript::inline("export default {}", None);
        assert_eq!(
            ScriptProvenance::of(Some(&script)),
            ScriptProvenance::Inline {
                code: "export default {}",
                map: None
            }
        );
    }

    #[test]
    fn test_external_script() {
        let script = CompiledScript::external("exports.default = {}", None, "export default {}");
        let provenance = ScriptProvenance::of(Some(&script));

        assert!(provenance.is_external());
        assert!(matches!(
            provenance,
            ScriptProvenance::External {
                content: "export default {}",
                ..
            }
        ));
    }
}
