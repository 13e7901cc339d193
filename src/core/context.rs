use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        DiffReport, LocaleMessages,
        parsers::json::{LoadResult, load_locales},
        scanner::{UsageScan, scan_usages},
    },
};

/// Everything one run works on, built once and passed by reference.
///
/// Configuration is resolved with the following priority (highest first):
/// 1. CLI arguments (e.g., `--messages-root ./locales`)
/// 2. `.keyauditrc.json`
/// 3. Built-in defaults
pub struct CheckContext {
    pub config: Config,
    /// Project root; source includes are resolved against it.
    pub root_dir: PathBuf,
    pub messages_dir: PathBuf,
    /// Flattened locales plus the ones that failed to load.
    pub load: LoadResult,
    pub scan: UsageScan,
    diff: OnceCell<DiffReport>,
}

impl CheckContext {
    /// Create a context from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, or if not a single
    /// locale dictionary could be loaded.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.root.clone();

        let config_result = load_config(&root_dir)?;
        match &config_result.source {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using defaults"),
        }

        let mut config = config_result.config;
        if let Some(ref messages_root) = common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if !common_args.locales.is_empty() {
            config.locales = common_args.locales.clone();
        }
        config.validate()?;

        Self::from_config(root_dir, config)
    }

    /// Create a context from an already-resolved configuration.
    pub fn from_config(root_dir: PathBuf, config: Config) -> Result<Self> {
        let messages_dir = resolve_messages_dir(&root_dir, &config.messages_root);

        let load = load_locales(&messages_dir, &config.locales);
        if load.errors.len() == config.locales.len() {
            let details = load
                .errors
                .iter()
                .map(|e| format!("  - {}: {}", e.locale, e.error))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "No locale dictionary could be loaded from '{}':\n{}",
                messages_dir.display(),
                details
            );
        }

        let scan = scan_usages(&root_dir, &config)?;

        Ok(Self {
            config,
            root_dir,
            messages_dir,
            load,
            scan,
            diff: OnceCell::new(),
        })
    }

    /// Locales that loaded successfully, in configured order.
    pub fn loaded_messages(&self) -> Vec<&LocaleMessages> {
        self.load
            .messages
            .iter()
            .filter(|m| self.load.is_loaded(&m.locale))
            .collect()
    }

    /// The key set differences (lazy, computed once).
    pub fn diff(&self) -> &DiffReport {
        self.diff.get_or_init(|| {
            let mut keep = self.config.ignore_unused_patterns();
            keep.extend(self.scan.dynamic_patterns());
            DiffReport::compute(&self.loaded_messages(), &self.scan.used_keys(), &keep)
        })
    }
}

/// Resolve `messages_root` against the project root.
///
/// Absolute paths are used as-is; when the root is the current directory the
/// configured path is kept verbatim so reported paths stay short.
fn resolve_messages_dir(root_dir: &Path, messages_root: &str) -> PathBuf {
    let p = Path::new(messages_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
