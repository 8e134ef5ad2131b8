use super::{CommandStatus, RunContext};
use crate::io::{self, OutputFormat};
use anyhow::Result;

pub fn run_catalog(format: Option<OutputFormat>, ctx: &RunContext) -> Result<CommandStatus> {
    let mut writer = io::create_writer(
        ctx.format(format),
        io::open_destination(None)?,
        ctx.style(false),
    );
    writer.write_catalog()?;
    Ok(CommandStatus::Success)
}
