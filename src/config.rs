use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".docweaverc.json";

/// Patterns excluded from every walk regardless of configuration.
///
/// The ignore files themselves and the config file never contain
/// documentation; `.git`, `node_modules`, and `target` are excluded so a
/// checkout can be collated without wading through vendored trees.
pub const BASE_IGNORE_PATTERNS: &[&str] = &[
    "**/.docignore",
    "**/.gitignore",
    "**/.docweaverc.json",
    "**/.git/**",
    "**/node_modules/**",
    "**/target/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extra glob patterns to exclude from the walk.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Gitignore-style files (relative to the walk root) to source further
    /// ignore patterns from.
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
}

fn default_ignore_files() -> Vec<String> {
    vec![".docignore".to_string(), ".gitignore".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            ignore_files: default_ignore_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    /// Patterns sourced from ignore files are not validated here; the walk
    /// warns about and skips those at compile time instead.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Read ignore patterns from a gitignore-style file.
///
/// A missing file yields no patterns. Lines are trimmed; blanks and `#`
/// comments are dropped. A leading `/` roots the pattern at the walk root;
/// anything else gets a `**/` prefix so it matches at any depth.
pub fn ignore_file_patterns(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.strip_prefix('/') {
            Some(rooted) => rooted.to_string(),
            None => format!("**/{}", line),
        })
        .collect())
}
