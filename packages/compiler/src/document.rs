use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Template,
    Script,
    Style,
}

impl SectionKind {
    /// Language assumed when a section declares none
    pub fn default_lang(&self) -> &'static str {
        match self {
            SectionKind::Template => "html",
            SectionKind::Script => "js",
            SectionKind::Style => "css",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Template => "template",
            SectionKind::Script => "script",
            SectionKind::Style => "style",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Text between the section's tags
    Inline(String),
    /// Path from a `src` attribute, relative to the document
    External { src: String },
}

/// One block of a component document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// Declared `lang` attribute
    pub lang: Option<String>,
    /// Document line (1-based) holding the first line of inline content
    pub start_line: u32,
    pub content: SectionContent,
}

impl Section {
    pub fn inline(kind: SectionKind, text: impl Into<String>, start_line: u32) -> Self {
        Self {
            kind,
            lang: None,
            start_line,
            content: SectionContent::Inline(text.into()),
        }
    }

    pub fn external(kind: SectionKind, src: impl Into<String>, start_line: u32) -> Self {
        Self {
            kind,
            lang: None,
            start_line,
            content: SectionContent::External { src: src.into() },
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Declared language, or the kind's default
    pub fn lang(&self) -> &str {
        self.lang
            .as_deref()
            .unwrap_or_else(|| self.kind.default_lang())
    }
}

/// A parsed single-file component
///
/// `script` is the one effective script section; choosing it among several
/// candidates is the parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: PathBuf,
    /// Full raw text of the file
    pub text: String,
    pub template: Option<Section>,
    pub script: Option<Section>,
    pub styles: Vec<Section>,
}

impl Document {
    pub fn new(file_name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
            template: None,
            script: None,
            styles: Vec::new(),
        }
    }

    pub fn with_template(mut self, section: Section) -> Self {
        self.template = Some(section);
        self
    }

    pub fn with_script(mut self, section: Section) -> Self {
        self.script = Some(section);
        self
    }

    pub fn with_style(mut self, section: Section) -> Self {
        self.styles.push(section);
        self
    }

    /// Directory `src` references are resolved against
    pub fn dir(&self) -> &Path {
        self.file_name.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn file_name_str(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lang() {
        let script = Section::inline(SectionKind::Script, "export default {}", 2);
        assert_eq!(script.lang(), "js");

        let style = Section::inline(SectionKind::Style, ".a {}", 8).with_lang("scss");
        assert_eq!(style.lang(), "scss");
    }

    #[test]
    fn test_document_dir() {
        let doc = Document::new("/project/components/Basic.vue", "");
        assert_eq!(doc.dir(), Path::new("/project/components"));

        let doc = Document::new("Basic.vue", "");
        assert_eq!(doc.dir(), Path::new(""));
    }

    #[test]
    fn test_builders() {
        let doc = Document::new("Basic.vue", "")
            .with_template(Section::inline(SectionKind::Template, "<div />", 2))
            .with_script(Section::external(SectionKind::Script, "./Basic.js", 4))
            .with_style(Section::inline(SectionKind::Style, "", 5));

        assert!(doc.template.is_some());
        assert!(matches!(
            doc.script.unwrap().content,
            SectionContent::External { .. }
        ));
        assert_eq!(doc.styles.len(), 1);
    }
}
