use crate::domain::errors::HelperError;
use crate::domain::models::AppConfig;
use std::path::{Path, PathBuf};

pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/forscan-helper/config.toml"))
}

pub fn parse_config(raw: &str, path: &Path) -> Result<AppConfig, HelperError> {
    toml::from_str(raw).map_err(|source| HelperError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `explicit` when given (it must exist), otherwise the per-user config if present.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, HelperError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(AppConfig::default()),
        },
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| HelperError::io(&path, e))?;
    let config = parse_config(&raw, &path)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
