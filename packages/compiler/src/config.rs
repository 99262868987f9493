use serde::{Deserialize, Serialize};
use sfc_common::{CommonResult, FileSystem, RealFileSystem};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "sfc.config.json";

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("javascript", "js"),
    ("babel", "js"),
    ("jsx", "js"),
    ("ts", "typescript"),
    ("coffee", "coffeescript"),
];

/// Transform configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    /// Keep the maps block compilers produce
    ///
    /// When off, script lines are mapped by line identity instead.
    #[serde(default = "default_true")]
    pub source_map: bool,

    /// Append the map to the module as a `sourceMappingURL` data URL
    #[serde(default)]
    pub inline_source_map: bool,

    /// Extra language aliases, merged over the built-in ones
    #[serde(default)]
    pub lang_aliases: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl TransformConfig {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> CommonResult<Self> {
        Self::load_from(&RealFileSystem, cwd)
    }

    pub fn load_from(fs: &dyn FileSystem, cwd: &Path) -> CommonResult<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if fs.exists(&config_path) {
            let content = fs.read_to_string(&config_path)?;
            let config: TransformConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(TransformConfig::default())
        }
    }

    /// Canonical name for a declared language tag
    pub fn resolve_lang<'a>(&'a self, lang: &'a str) -> &'a str {
        if let Some(alias) = self.lang_aliases.get(lang) {
            return alias;
        }
        BUILTIN_ALIASES
            .iter()
            .find(|(from, _)| *from == lang)
            .map_or(lang, |(_, to)| *to)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            source_map: true,
            inline_source_map: false,
            lang_aliases: HashMap::new(),
        }
    }
}
