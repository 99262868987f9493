use crate::config::TransformConfig;
use crate::document::{Document, Section, SectionContent};
use crate::error::{CompileError, CompileResult};
use sfc_common::{FileSystem, RealFileSystem};
use sfc_sourcemap::{CompiledScript, RawSourceMap};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Output of a sub-language compiler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledBlock {
    pub code: String,
    pub map: Option<RawSourceMap>,
}

/// Compiles one sub-language (TypeScript, CoffeeScript, SCSS, ...)
pub trait BlockCompiler: Send + Sync {
    fn compile(&self, source: &str, file_name: &str) -> anyhow::Result<CompiledBlock>;
}

/// Returns its input unchanged and produces no map
pub struct PassThrough;

impl BlockCompiler for PassThrough {
    fn compile(&self, source: &str, _file_name: &str) -> anyhow::Result<CompiledBlock> {
        Ok(CompiledBlock {
            code: source.to_string(),
            map: None,
        })
    }
}

/// Block compilers keyed by canonical language name
#[derive(Clone)]
pub struct CompilerRegistry {
    compilers: HashMap<String, Arc<dyn BlockCompiler>>,
}

impl CompilerRegistry {
    /// A registry with no compilers at all
    pub fn empty() -> Self {
        Self {
            compilers: HashMap::new(),
        }
    }

    /// Pass-through compilers for plain `js` and `css`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("js", PassThrough);
        registry.register("css", PassThrough);
        registry
    }

    pub fn register(&mut self, lang: impl Into<String>, compiler: impl BlockCompiler + 'static) {
        self.compilers.insert(lang.into(), Arc::new(compiler));
    }

    pub fn get(&self, lang: &str) -> Option<&dyn BlockCompiler> {
        self.compilers.get(lang).map(|c| c.as_ref())
    }
}

impl Default for CompilerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Section text ready for a compiler
struct SectionSource {
    text: String,
    /// Set when the text came from a `src` reference
    external: bool,
}

/// Runs the right compiler for each document section
pub struct BlockAdapter {
    registry: CompilerRegistry,
    config: TransformConfig,
    fs: Box<dyn FileSystem>,
}

impl BlockAdapter {
    pub fn new(registry: CompilerRegistry, config: TransformConfig) -> Self {
        Self {
            registry,
            config,
            fs: Box::new(RealFileSystem),
        }
    }

    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Compile the document's effective script section
    ///
    /// Returns `None` when the document has no script.
    #[instrument(skip_all, fields(file = %document.file_name.display()))]
    pub fn compile_script(&self, document: &Document) -> CompileResult<Option<CompiledScript>> {
        let Some(section) = &document.script else {
            debug!("Document has no script section");
            return Ok(None);
        };

        let source = self.load_section(section, document)?;
        let block = self.compile_source(section, &source.text, document)?;

        let external_src = source.external.then_some(source.text);
        Ok(Some(CompiledScript {
            code: block.code,
            map: block.map,
            external_src,
        }))
    }

    /// Compile every style section, in document order
    pub fn compile_styles(&self, document: &Document) -> CompileResult<Vec<CompiledBlock>> {
        document
            .styles
            .iter()
            .map(|section| {
                let source = self.load_section(section, document)?;
                self.compile_source(section, &source.text, document)
            })
            .collect()
    }

    /// Text of a section as the compiler should see it
    ///
    /// Inline text is padded with blank lines so that its line numbers match
    /// the document's. Text behind a `src` reference is read as is.
    pub fn section_text(&self, section: &Section, document: &Document) -> CompileResult<String> {
        Ok(self.load_section(section, document)?.text)
    }

    fn load_section(&self, section: &Section, document: &Document) -> CompileResult<SectionSource> {
        match &section.content {
            SectionContent::Inline(text) => {
                let padding = "\n".repeat(section.start_line.saturating_sub(1) as usize);
                Ok(SectionSource {
                    text: padding + text,
                    external: false,
                })
            }
            SectionContent::External { src } => {
                let path = document.dir().join(src);
                debug!(path = %path.display(), kind = %section.kind, "Reading external section");

                let text = self
                    .fs
                    .read_to_string(&path)
                    .map_err(|source| CompileError::ExternalSource {
                        path,
                        document: document.file_name.clone(),
                        source,
                    })?;
                Ok(SectionSource {
                    text,
                    external: true,
                })
            }
        }
    }

    fn compile_source(
        &self,
        section: &Section,
        text: &str,
        document: &Document,
    ) -> CompileResult<CompiledBlock> {
        let lang = self.config.resolve_lang(section.lang());
        let compiler = self
            .registry
            .get(lang)
            .ok_or_else(|| CompileError::UnknownLanguage {
                lang: lang.to_string(),
                kind: section.kind,
            })?;

        debug!(lang, kind = %section.kind, "Compiling section");
        let mut block = compiler.compile(text, &document.file_name_str())?;

        if !self.config.source_map {
            block.map = None;
        }
        Ok(block)
    }
}
