use crate::adapter::{BlockAdapter, CompiledBlock};
use crate::context::ModuleWriter;
use crate::document::Document;
use crate::error::CompileResult;
use sfc_sourcemap::{synthesize, UnifiedSourceMap};
use tracing::{debug, info, instrument};

/// Render code generated from a template block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFunction {
    /// Code declaring `render` and `staticRenderFns`
    pub code: String,
}

/// Compiles template markup into a render function
pub trait TemplateCompiler: Send + Sync {
    fn compile(&self, template: &str, file_name: &str) -> anyhow::Result<RenderFunction>;
}

/// A compiled component module and its map
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    pub map: UnifiedSourceMap,
    /// Compiled style sections, in document order
    pub styles: Vec<CompiledBlock>,
    /// Module lines `[start, end)` holding the render function
    pub render_range: (u32, u32),
}

impl TransformOutput {
    /// Module code with the map appended as a `sourceMappingURL` comment
    pub fn code_with_inline_map(&self) -> CompileResult<String> {
        let url = self.map.to_data_url()?;
        Ok(format!("{}\n//# sourceMappingURL={}", self.code, url))
    }
}

/// Compile a component document into a module and its source map
///
/// The module is the compiled script followed by the render function, which
/// is attached to the options object the script exports. Without a script
/// the options object is empty; without a template (or template compiler)
/// no render function is emitted.
#[instrument(skip_all, fields(file = %document.file_name.display()))]
pub fn transform(
    document: &Document,
    adapter: &BlockAdapter,
    template_compiler: Option<&dyn TemplateCompiler>,
) -> CompileResult<TransformOutput> {
    info!("Transforming component");

    let script = adapter.compile_script(document)?;
    let styles = adapter.compile_styles(document)?;
    let file_name = document.file_name_str();

    let mut writer = ModuleWriter::new();
    match &script {
        Some(script) => {
            writer.add_block(&script.code);
            writer.add_line(
                "var __options__ = typeof exports.default === 'function' ? exports.default.options : exports.default",
            );
        }
        None => writer.add_line("var __options__ = {}"),
    }

    let mut render_range = (writer.current_line(), writer.current_line());
    let mut template_start_line = 1;

    if let (Some(section), Some(compiler)) = (&document.template, template_compiler) {
        let template = adapter.section_text(section, document)?;
        let render = compiler.compile(&template, &file_name)?;

        render_range = writer.add_block(&render.code);
        template_start_line = section.start_line;
        writer.add_line("__options__.render = render");
        writer.add_line("__options__.staticRenderFns = staticRenderFns");
        debug!(
            start = render_range.0,
            end = render_range.1,
            template_start_line,
            "Render function emitted"
        );
    }

    if script.is_none() {
        writer.add_line("exports.default = __options__");
    }

    let map = synthesize(
        script.as_ref(),
        &document.text,
        &file_name,
        render_range.0,
        render_range.1,
        template_start_line,
    )?;

    let mut output = TransformOutput {
        code: writer.into_output(),
        map,
        styles,
        render_range,
    };

    if adapter.config().inline_source_map {
        output.code = output.code_with_inline_map()?;
    }

    info!(
        mappings = output.map.mapping_count(),
        "Component transform complete"
    );
    Ok(output)
}
