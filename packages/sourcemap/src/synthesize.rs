use crate::builder::SourceMapBuilder;
use crate::error::SourceMapResult;
use crate::position::Position;
use crate::provenance::{CompiledScript, ScriptProvenance};
use crate::raw::RawSourceMap;
use crate::unified::UnifiedSourceMap;
use crate::utils::{base_name, split_lines};
use tracing::{debug, instrument};

/// Build the source map of a compiled component module
///
/// # Arguments
/// * `script` - Compiled script section, `None` if the document has none
/// * `document_text` - Full text of the component document
/// * `file_name` - Path of the document; only its base name is used
/// * `render_fn_start_line` - First module line of the render function (1-based)
/// * `render_fn_end_line` - First module line after the render function
/// * `template_start_line` - Document line the template block starts on (1-based)
///
/// Mappings from the script compiler's map are carried over with their
/// source renamed to the document's base name. Without a script map every
/// line of the script code maps to the same line of the document. Each line
/// in `[render_fn_start_line, render_fn_end_line)` maps to the start of the
/// template, unless the script came from an external file: then the map only
/// describes the script and embeds the external text instead of the document.
#[instrument(skip_all, fields(file = %base_name(file_name)))]
pub fn synthesize(
    script: Option<&CompiledScript>,
    document_text: &str,
    file_name: &str,
    render_fn_start_line: u32,
    render_fn_end_line: u32,
    template_start_line: u32,
) -> SourceMapResult<UnifiedSourceMap> {
    let file = base_name(file_name);

    let (mut builder, content, map_render_fn) = match ScriptProvenance::of(script) {
        ScriptProvenance::None => {
            debug!("No script section");
            (SourceMapBuilder::new(file), document_text, true)
        }
        ScriptProvenance::Inline { code, map } => (script_map(file, code, map)?, document_text, true),
        ScriptProvenance::External { code, map, content } => {
            debug!("Script loaded from external file, render function left unmapped");
            (script_map(file, code, map)?, content, false)
        }
    };

    builder.set_source_content(content);

    if map_render_fn {
        let template = Position::line_start(template_start_line);
        for line in render_fn_start_line..render_fn_end_line {
            builder.add_mapping(Position::line_start(line), template, None)?;
        }
    }

    debug!(mappings = builder.mapping_count(), "Source map synthesized");
    Ok(UnifiedSourceMap::new(builder.build()))
}

/// Mappings for the script part of the module
fn script_map(
    file: &str,
    code: &str,
    map: Option<&RawSourceMap>,
) -> SourceMapResult<SourceMapBuilder> {
    match map {
        Some(raw) => {
            let existing = raw.decode()?;
            debug!(tokens = existing.get_token_count(), "Re-sourcing script map");
            Ok(SourceMapBuilder::from_source_map(file, &existing))
        }
        None => {
            let mut builder = SourceMapBuilder::new(file);
            for (index, _) in split_lines(code).enumerate() {
                let line = Position::line_start(index as u32 + 1);
                builder.add_mapping(line, line, None)?;
            }
            debug!(lines = builder.mapping_count(), "Script has no map, using line identity");
            Ok(builder)
        }
    }
}
