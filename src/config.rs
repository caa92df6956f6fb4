//! Config file and credential sources
//!
//! Settings come from an optional TOML file; credentials come from the
//! process environment, falling back to a dotenv file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use literal_shelf::Credentials;
use serde::Deserialize;

use crate::consts::{APP_NAME, EMAIL_VAR, PASSWORD_VAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) env_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/literal-shelf/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_NAME).join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_NAME).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. ~/.literal-shelf.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_NAME}.toml")));
        }

        paths
    }
}

/// Value part of a dotenv line. A quoted value runs to its closing quote and
/// anything after it is dropped; an unquoted value ends at `#`.
fn parse_env_value(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(quote) = raw.chars().next().filter(|c| matches!(*c, '"' | '\'' | '`'))
        && let Some(end) = raw[1..].find(quote)
    {
        let inner = &raw[1..1 + end];
        return if quote == '"' {
            inner.replace("\\n", "\n")
        } else {
            inner.to_string()
        };
    }
    let unquoted = raw.split_once('#').map_or(raw, |(value, _)| value);
    unquoted.trim().to_string()
}

/// Parse dotenv text: `KEY=value` lines, `#` comments (whole-line or
/// trailing), optional `export ` prefix and quoted values.
pub(crate) fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), parse_env_value(value));
    }
    vars
}

/// Read a dotenv file; a missing or unreadable file yields no variables
pub(crate) fn load_env_file(path: &Path) -> HashMap<String, String> {
    fs::read_to_string(path)
        .map(|content| parse_env_file(&content))
        .unwrap_or_default()
}

/// Credentials from `lookup` (the process environment), then the dotenv vars.
/// Each variable falls back on its own; empty values count as unset.
pub(crate) fn resolve_credentials(
    lookup: impl Fn(&str) -> Option<String>,
    env_file: &HashMap<String, String>,
) -> Option<Credentials> {
    let get = |name: &str| {
        lookup(name)
            .filter(|v| !v.is_empty())
            .or_else(|| env_file.get(name).cloned())
    };
    Credentials::from_parts(get(EMAIL_VAR), get(PASSWORD_VAR))
}
