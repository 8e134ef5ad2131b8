use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::PotabilityConfig;
use super::validation::validate_config_result;
use crate::core::Error;

pub const CONFIG_FILE_NAME: &str = ".potability.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse TOML and validate, reporting every invalid field in one message.
pub fn parse_and_validate_config(contents: &str) -> Result<PotabilityConfig, String> {
    let config = toml::from_str::<PotabilityConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    validate_config_result(&config)?;
    Ok(config)
}

/// Load an explicitly named config file. Any problem is an error.
pub fn load_config_from(path: &Path) -> Result<PotabilityConfig, Error> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|message| Error::configuration(message, Some(path.to_path_buf())))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Discovered config files are best-effort: problems are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PotabilityConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// `start` and up to `max_depth - 1` of its ancestors.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
pub fn discover_config(start: PathBuf) -> PotabilityConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PotabilityConfig::default()
        })
}

/// Explicit path when given, otherwise discovery from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<PotabilityConfig, Error> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(PotabilityConfig::default())
        }
    }
}
