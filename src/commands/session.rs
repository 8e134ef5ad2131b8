//! Line-driven interactive form.
//!
//! Reads one command per line, applies it to a [`FormSession`] and prints
//! the affected panel. Classifier failures are reported and the session
//! carries on with its inputs intact.

use super::{CommandStatus, RunContext};
use crate::catalog;
use crate::classifier::{Classifier, ConfiguredClassifier};
use crate::config::Backend;
use crate::core::{Error, ParameterKey};
use crate::formatting::Style;
use crate::io::output::{OutputWriter, TerminalWriter};
use crate::io::ensure_finite;
use crate::session::FormSession;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;
use tracing::debug;

const HELP: &str = "\
Commands:
  set <key> <value>   Update one parameter (e.g. set ph 7.2)
  show                Show parameters, errors and the latest result
  status              Show the parameter analysis panel
  classify            Validate and classify the current parameters
  reset               Restore defaults and clear the result
  help                Show this help
  quit                Leave the session";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Set(ParameterKey, f64),
    Show,
    Status,
    Classify,
    Reset,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let (Some(name), Some(raw), None) = (words.next(), words.next(), words.next())
                else {
                    return Err("usage: set <key> <value>".to_string());
                };
                let key = ParameterKey::from_name(name)
                    .ok_or_else(|| format!("unknown parameter '{}'", name))?;
                let value: f64 = raw
                    .parse()
                    .map_err(|_| format!("'{}' is not a number", raw))?;
                ensure_finite(key.as_str(), value).map_err(|e| e.to_string())?;
                Self::Set(key, value)
            }
            "show" => Self::Show,
            "status" => Self::Status,
            "classify" => Self::Classify,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

/// Run the session over arbitrary reader/writer pairs until `quit` or EOF.
pub fn run_session<R, W, C>(
    input: R,
    mut output: W,
    classifier: &C,
    runtime: &Runtime,
    style: Style,
) -> Result<FormSession>
where
    R: BufRead,
    W: Write,
    C: Classifier,
{
    let mut session = FormSession::new();
    writeln!(output, "Water potability session. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line.context("Failed to read session input")?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", style.error(&message))?;
                continue;
            }
        };
        debug!(?command, "session command");

        match command {
            SessionCommand::Set(key, value) => {
                session.update_parameter(key, value);
                let descriptor = catalog::descriptor(key);
                writeln!(
                    output,
                    "{} = {}",
                    descriptor.name,
                    descriptor.format_value(value)
                )?;
            }
            SessionCommand::Show => show(&session, &mut output, style)?,
            SessionCommand::Status => {
                TerminalWriter::new(&mut output, style).write_status(session.parameters())?;
            }
            SessionCommand::Classify => {
                writeln!(output, "{}", style.dim("Analyzing water quality..."))?;
                let outcome = runtime.block_on(session.classify(classifier)).map(|_| ());
                match outcome {
                    Ok(()) => {
                        TerminalWriter::new(&mut output, style)
                            .write_result_view(session.view(), None)?;
                    }
                    Err(Error::Validation(errors)) => {
                        TerminalWriter::new(&mut output, style).write_validation(&errors)?;
                    }
                    Err(e) => {
                        writeln!(output, "{}", style.warning(&e.to_string()))?;
                    }
                }
            }
            SessionCommand::Reset => {
                session.reset();
                writeln!(output, "Parameters reset to defaults")?;
            }
            SessionCommand::Help => writeln!(output, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    output.flush()?;
    Ok(session)
}

fn show<W: Write>(session: &FormSession, output: &mut W, style: Style) -> Result<()> {
    for (key, value) in session.parameters().entries() {
        let descriptor = catalog::descriptor(key);
        write!(
            output,
            "  {:<24} {:>14}",
            descriptor.name,
            descriptor.format_value(value)
        )?;
        match session.errors().get(key) {
            Some(message) => writeln!(output, "  {}", style.error(message))?,
            None => writeln!(output)?,
        }
    }
    writeln!(output)?;
    TerminalWriter::new(output, style).write_result_view(session.view(), None)
}

/// Interactive session on stdin/stdout.
pub fn run_interactive(
    backend: Option<Backend>,
    latency_ms: Option<u64>,
    ctx: &RunContext,
) -> Result<CommandStatus> {
    let mut config = ctx.config.clone();
    if let Some(backend) = backend {
        config.classifier.backend = backend;
    }
    if let Some(latency_ms) = latency_ms {
        config.classifier.latency_ms = latency_ms;
    }
    let classifier = ConfiguredClassifier::from_config(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let stdin = io::stdin();
    run_session(
        stdin.lock(),
        io::stdout(),
        &classifier,
        &runtime,
        ctx.style(false),
    )?;
    Ok(CommandStatus::Success)
}
