use super::{CommandStatus, RunContext};
use crate::cli::ParameterArgs;
use crate::io::{self, OutputFormat};
use crate::observability::{set_phase, ClassificationPhase};
use anyhow::Result;
use tracing::warn;

/// Print validation errors for the given parameters.
///
/// Unlike `classify`, only the supplied entries are checked; names the
/// catalog does not know are skipped.
pub fn run_validate(
    parameters: &ParameterArgs,
    format: Option<OutputFormat>,
    ctx: &RunContext,
) -> Result<CommandStatus> {
    let input = parameters.to_input()?;
    let unknown = input.unknown_names();
    if !unknown.is_empty() {
        warn!("Skipping unknown parameter(s): {}", unknown.join(", "));
    }

    let errors = {
        let _phase = set_phase(ClassificationPhase::Validation);
        input.validate()
    };

    let mut writer = io::create_writer(
        ctx.format(format),
        io::open_destination(None)?,
        ctx.style(false),
    );
    writer.write_validation(&errors)?;

    Ok(if errors.is_empty() {
        CommandStatus::Success
    } else {
        CommandStatus::ValidationFailed
    })
}
