use super::{resolve_parameters, CommandStatus, RunContext};
use crate::classifier::{Classifier, ConfiguredClassifier};
use crate::cli::ParameterArgs;
use crate::config::{Backend, PotabilityConfig};
use crate::core::Error;
use crate::io::{self, OutputFormat, OutputWriter};
use crate::observability::{set_detail, set_phase, ClassificationPhase};
use crate::progress::{create_spinner, ProgressConfig};
use crate::scoring;
use crate::session::FormSession;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info_span};

#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    pub parameters: ParameterArgs,
    pub backend: Option<Backend>,
    pub latency_ms: Option<u64>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

impl ClassifyConfig {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn effective_config(&self, base: &PotabilityConfig) -> PotabilityConfig {
        let mut config = base.clone();
        if let Some(backend) = self.backend {
            config.classifier.backend = backend;
        }
        if let Some(latency_ms) = self.latency_ms {
            config.classifier.latency_ms = latency_ms;
        }
        config
    }
}

pub fn run_classify(config: ClassifyConfig, ctx: &RunContext) -> Result<CommandStatus> {
    let _span = info_span!("classify").entered();

    let input = {
        let _phase = set_phase(ClassificationPhase::InputParsing);
        let _detail = config
            .parameters
            .input
            .as_ref()
            .map(|path| set_detail(path.display().to_string()));
        config.parameters.to_input()?
    };
    let mut session = FormSession::with_parameters(resolve_parameters(&input));

    let format = ctx.format(config.format);
    // Opened lazily: a failed classification must not truncate an existing report.
    let open_writer = || -> Result<Box<dyn OutputWriter>> {
        let destination = io::open_destination(config.output.as_deref())?;
        Ok(io::create_writer(
            format,
            destination,
            ctx.style(config.output.is_some()),
        ))
    };

    let snapshot = match session.begin_classification() {
        Ok(snapshot) => snapshot,
        Err(Error::Validation(errors)) => {
            open_writer()?.write_validation(&errors)?;
            return Ok(CommandStatus::ValidationFailed);
        }
        Err(e) => return Err(e.into()),
    };

    let effective = config.effective_config(&ctx.config);
    let classifier = ConfiguredClassifier::from_config(&effective)?;
    debug!(backend = classifier.name(), "classifier selected");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let spinner = create_spinner(
        ProgressConfig::from_env(ctx.plain || format != OutputFormat::Terminal),
        "Analyzing water quality...",
    );
    let outcome = {
        let _phase = set_phase(ClassificationPhase::Classification);
        runtime.block_on(classifier.classify(&snapshot))
    };
    spinner.finish_and_clear();

    session
        .complete_classification(outcome)
        .context("Classification failed; parameters were not changed")?;

    let _phase = set_phase(ClassificationPhase::Rendering);
    let mut writer = open_writer()?;
    let breakdown = (ctx.verbosity > 0).then(|| scoring::score_breakdown(&snapshot));
    writer.write_result_view(session.view(), breakdown.as_ref())?;
    if format == OutputFormat::Terminal {
        writer.write_status(session.parameters())?;
    }

    Ok(CommandStatus::Success)
}
