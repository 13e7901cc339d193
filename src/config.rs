use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyauditrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    #[serde(default)]
    pub ignore_unused: Vec<String>,
    #[serde(default = "default_placeholder_marker")]
    pub placeholder_marker: String,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_locales() -> Vec<String> {
    ["zh", "en"].map(String::from).to_vec()
}

fn default_includes() -> Vec<String> {
    ["app", "components", "lib"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    [
        "node_modules",
        ".next",
        "dist",
        "build",
        "out",
        "backups",
        ".git",
    ]
    .map(String::from)
    .to_vec()
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].map(String::from).to_vec()
}

fn default_translation_functions() -> Vec<String> {
    vec!["t".to_string()]
}

fn default_placeholder_marker() -> String {
    "[{LOCALE}]".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            locales: default_locales(),
            includes: default_includes(),
            excluded_dirs: default_excluded_dirs(),
            extensions: default_extensions(),
            translation_functions: default_translation_functions(),
            ignore_unused: Vec::new(),
            placeholder_marker: default_placeholder_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.trim().is_empty() {
                bail!("'locales' contains an empty locale code");
            }
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate locale in 'locales': \"{}\"", locale);
            }
        }

        if self.translation_functions.is_empty() {
            bail!("'translationFunctions' must list at least one function name");
        }

        for pattern in &self.ignore_unused {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'ignoreUnused': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }

    /// Compiled `ignoreUnused` patterns. Call after `validate`.
    pub fn ignore_unused_patterns(&self) -> Vec<Pattern> {
        self.ignore_unused
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    /// Marker prepended to values copied into `locale` by the repair pass.
    pub fn marker_for(&self, locale: &str) -> String {
        self.placeholder_marker
            .replace("{LOCALE}", &locale.to_uppercase())
            .replace("{locale}", locale)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` until the config file, a `.git` directory or the
/// filesystem root is found.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
