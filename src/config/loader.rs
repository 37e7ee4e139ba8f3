//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CANDIDATES: [&str; 4] = ["config.json", "config.toml", "config.yaml", "config.yml"];

/// Directory searched for config files: `$XDG_CONFIG_HOME/hiden`, falling back
/// to `$HOME/.config/hiden`.
pub fn default_config_home() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("hiden"));
    }
    env::var_os("HOME").filter(|v| !v.is_empty()).map(|home| {
        PathBuf::from(home).join(".config").join("hiden")
    })
}

/// Load settings.
///
/// An explicit `config_path` must be readable and valid. A file found by
/// discovery under `config_home` is best-effort: any problem with it yields the
/// default config.
pub fn load_config(config_home: Option<&Path>, config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config file: {}", path.display()))?;
        return parse_config(&content, path).map(Config::normalized);
    }

    let Some(config_file) = config_home.and_then(discover_config) else {
        return Ok(Config::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(cfg) => Ok(cfg.normalized()),
        Err(e) => {
            tracing::debug!("Ignoring config {}: {:#}", config_file.display(), e);
            Ok(Config::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<Config> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "json" => serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON config: {}", config_file.display())),
        "toml" => toml::from_str(content)
            .with_context(|| format!("Invalid TOML config: {}", config_file.display())),
        "yaml" | "yml" => serde_yaml::from_str(content)
            .with_context(|| format!("Invalid YAML config: {}", config_file.display())),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn discover_config(config_home: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|name| config_home.join(name)).find(|path| path.is_file())
}
