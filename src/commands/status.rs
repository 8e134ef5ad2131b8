use super::{resolve_parameters, CommandStatus, RunContext};
use crate::cli::ParameterArgs;
use crate::io::{self, OutputFormat};
use anyhow::Result;

/// Render the visualization panel without classifying.
pub fn run_status(
    parameters: &ParameterArgs,
    format: Option<OutputFormat>,
    ctx: &RunContext,
) -> Result<CommandStatus> {
    let params = resolve_parameters(&parameters.to_input()?);
    let mut writer = io::create_writer(
        ctx.format(format),
        io::open_destination(None)?,
        ctx.style(false),
    );
    writer.write_status(&params)?;
    Ok(CommandStatus::Success)
}
