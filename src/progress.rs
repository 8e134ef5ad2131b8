//! Spinner feedback while a classification is in flight.
//!
//! Spinners draw on stderr and are hidden when stderr is not a TTY, when
//! `--plain` or a machine-readable format is requested, or when
//! `POTABILITY_QUIET` is set.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub const TEMPLATE_SPINNER: &str = "{spinner} {msg}";
pub const QUIET_ENV_VAR: &str = "POTABILITY_QUIET";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        Self {
            quiet_mode: quiet || std::env::var(QUIET_ENV_VAR).is_ok(),
        }
    }

    pub fn should_show_progress(&self) -> bool {
        !self.quiet_mode && std::io::stderr().is_terminal()
    }
}

/// Spinner with `msg`, or a hidden bar when progress is suppressed.
pub fn create_spinner(config: ProgressConfig, msg: &str) -> ProgressBar {
    if !config.should_show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(TEMPLATE_SPINNER)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
