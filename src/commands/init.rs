use crate::config::{parse_and_validate_config, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Potability Configuration

[classifier]
# "heuristic" scores locally; "remote" posts to [classifier.remote].endpoint
backend = "heuristic"
latency_ms = 1500

# [classifier.remote]
# endpoint = "http://localhost:8000/classify"
# timeout_seconds = 10

[retry]
enabled = true
max_retries = 3
base_delay_ms = 100
strategy = "exponential"
timeout_seconds = 30
jitter_factor = 0.1

[output]
default_format = "terminal"
plain = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
