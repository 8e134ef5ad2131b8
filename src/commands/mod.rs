//! CLI command implementations.
//!
//! Each submodule handles one subcommand. They share a [`RunContext`] built
//! once from the global flags and the loaded configuration, and report a
//! [`CommandStatus`] that the binary turns into an exit code.
//!
//! Available commands:
//! - **classify**: validate and classify one sample
//! - **validate**: bounds check only
//! - **status**: per-parameter normal-range panel
//! - **catalog**: list parameter descriptors
//! - **session**: interactive form
//! - **init**: write a default `.potability.toml`

pub mod catalog;
pub mod classify;
pub mod init;
pub mod session;
pub mod status;
pub mod validate;

pub use classify::{run_classify, ClassifyConfig};
pub use init::{init_config, init_config_at};
pub use session::{run_session, SessionCommand};

use crate::cli::{Cli, Commands};
use crate::config::{load_config, PotabilityConfig};
use crate::core::ParameterSet;
use crate::formatting::{ColorMode, FormattingConfig, Style};
use crate::io::{OutputFormat, ParameterInput};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::warn;

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// Input was rejected by the validator
    ValidationFailed,
}

impl CommandStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::ValidationFailed => ExitCode::from(2),
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: PotabilityConfig,
    pub formatting: FormattingConfig,
    pub verbosity: u8,
    pub plain: bool,
}

impl RunContext {
    pub fn new(config: PotabilityConfig, verbosity: u8, plain: bool) -> Self {
        let plain = plain || config.output.plain;
        let formatting = if plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        };
        Self {
            config,
            formatting,
            verbosity,
            plain,
        }
    }

    pub fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output.default_format)
    }

    /// Style for stdout, or an uncolored one when writing to a file.
    pub fn style(&self, to_file: bool) -> Style {
        if to_file {
            Style::new(FormattingConfig::new(ColorMode::Never, self.formatting.unicode))
        } else {
            Style::new(self.formatting)
        }
    }
}

/// Parameters for a one-shot command: defaults overlaid with the input.
pub(crate) fn resolve_parameters(input: &ParameterInput) -> ParameterSet {
    let unknown = input.unknown_names();
    if !unknown.is_empty() {
        warn!("Ignoring unknown parameter(s): {}", unknown.join(", "));
    }
    input.apply_to(ParameterSet::default())
}

/// Load configuration and dispatch the parsed command line.
pub fn run(cli: Cli) -> Result<CommandStatus> {
    if let Commands::Init { force } = cli.command {
        init_config(force)?;
        return Ok(CommandStatus::Success);
    }

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let ctx = RunContext::new(config, cli.verbosity, cli.plain);

    match cli.command {
        Commands::Classify {
            parameters,
            backend,
            latency_ms,
            format,
            output,
        } => run_classify(
            ClassifyConfig {
                parameters,
                backend: backend.map(Into::into),
                latency_ms,
                format,
                output,
            },
            &ctx,
        ),
        Commands::Validate { parameters, format } => {
            validate::run_validate(&parameters, format, &ctx)
        }
        Commands::Status { parameters, format } => {
            status::run_status(&parameters, format, &ctx)
        }
        Commands::Catalog { format } => catalog::run_catalog(format, &ctx),
        Commands::Session {
            backend,
            latency_ms,
        } => session::run_interactive(backend.map(Into::into), latency_ms, &ctx),
        Commands::Init { .. } => Ok(CommandStatus::Success),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_config_forces_plain_formatting() {
        let mut config = PotabilityConfig::default();
        config.output.plain = true;
        let ctx = RunContext::new(config, 0, false);
        assert!(ctx.plain);
        assert_eq!(ctx.formatting, FormattingConfig::plain());
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut config = PotabilityConfig::default();
        config.output.default_format = OutputFormat::Markdown;
        let ctx = RunContext::new(config, 0, true);
        assert_eq!(ctx.format(None), OutputFormat::Markdown);
        assert_eq!(ctx.format(Some(OutputFormat::Json)), OutputFormat::Json);
    }

    #[test]
    fn test_exit_codes_differ() {
        assert_ne!(
            CommandStatus::Success.exit_code(),
            CommandStatus::ValidationFailed.exit_code()
        );
    }
}
