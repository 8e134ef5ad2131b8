use crate::catalog;
use crate::core::{ClassificationResult, ParameterSet};
use crate::formatting::Style;
use crate::scoring::{self, ParameterStatus, ScoreBreakdown};
use crate::session::ResultView;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Local, Utc};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

const POTABLE_ADVICE: &str =
    "This water sample meets potability standards and is safe for consumption.";
const NOT_POTABLE_ADVICE: &str = "This water sample does not meet potability standards. Treatment is recommended before consumption.";

pub trait OutputWriter {
    /// Results panel: idle, loading, or a finished classification.
    fn write_result_view(
        &mut self,
        view: ResultView<'_>,
        breakdown: Option<&ScoreBreakdown>,
    ) -> anyhow::Result<()>;

    fn write_validation(&mut self, errors: &ValidationErrors) -> anyhow::Result<()>;

    /// Visualization panel: per-parameter good/warning status.
    fn write_status(&mut self, params: &ParameterSet) -> anyhow::Result<()>;

    fn write_catalog(&mut self) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    style: Style,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, style)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Timestamp in the local timezone, as shown under a result.
pub fn format_local_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn advice_for(result: &ClassificationResult) -> &'static str {
    if result.label().is_potable() {
        POTABLE_ADVICE
    } else {
        NOT_POTABLE_ADVICE
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

pub struct TerminalWriter<W: Write> {
    writer: W,
    style: Style,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, style: Style) -> Self {
        Self { writer, style }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result_view(
        &mut self,
        view: ResultView<'_>,
        breakdown: Option<&ScoreBreakdown>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render_result_view(view, &self.style))?;
        if let Some(breakdown) = breakdown {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", render_breakdown(breakdown, &self.style))?;
        }
        Ok(())
    }

    fn write_validation(&mut self, errors: &ValidationErrors) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render_validation(errors, &self.style))?;
        Ok(())
    }

    fn write_status(&mut self, params: &ParameterSet) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.style.header("Parameter Analysis"))?;
        writeln!(self.writer, "{}", render_status_table(params, &self.style))?;
        writeln!(
            self.writer,
            "{} {}   {} {}",
            self.style.status_marker(ParameterStatus::Good),
            ParameterStatus::Good.label(),
            self.style.status_marker(ParameterStatus::Warning),
            ParameterStatus::Warning.label()
        )?;
        Ok(())
    }

    fn write_catalog(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render_catalog_table(&self.style))?;
        Ok(())
    }
}

pub fn render_result_view(view: ResultView<'_>, style: &Style) -> String {
    match view {
        ResultView::Idle => format!(
            "{}\n{}",
            style.bold("Ready for Analysis"),
            style.dim("Enter water quality parameters to get classification results")
        ),
        ResultView::Loading => style.dim("Analyzing water quality..."),
        ResultView::Ready(result) => render_result(result, style),
    }
}

pub fn render_result(result: &ClassificationResult, style: &Style) -> String {
    let potable = result.label().is_potable();
    let headline = format!("Water is {}", result.label());
    let (marker, headline) = if potable {
        (style.good(style.symbol("✓", "[OK]")), style.good(&headline))
    } else {
        (style.error(style.symbol("✗", "[X]")), style.error(&headline))
    };

    [
        format!("{} {}", marker, style.bold(&headline)),
        format!("Confidence: {}", result.confidence_percent()),
        advice_for(result).to_string(),
        style.dim(&format!(
            "Analysis completed at {}",
            format_local_timestamp(result.timestamp())
        )),
    ]
    .join("\n")
}

pub fn render_breakdown(breakdown: &ScoreBreakdown, style: &Style) -> String {
    let mut lines = vec![style.header("Score breakdown")];
    for c in &breakdown.contributions {
        let descriptor = catalog::descriptor(c.key);
        lines.push(format!(
            "  {} {:<24} {:>14}  {:+.2}",
            style.status_marker(c.status),
            descriptor.name,
            descriptor.format_value(c.value),
            c.delta
        ));
    }
    lines.push(format!(
        "  raw score {:.2}, clamped {:.2}",
        breakdown.raw_score, breakdown.score
    ));
    lines.join("\n")
}

pub fn render_validation(errors: &ValidationErrors, style: &Style) -> String {
    if errors.is_empty() {
        return format!(
            "{} All parameters are within range",
            style.good(style.symbol("✓", "[OK]"))
        );
    }
    let mut lines = vec![style.error(&format!("{} parameter(s) out of range:", errors.len()))];
    for (key, message) in errors.iter() {
        lines.push(format!(
            "  {} {}: {}",
            style.error(style.symbol("✗", "[X]")),
            catalog::descriptor(key).name,
            message
        ));
    }
    lines.join("\n")
}

fn new_table(style: &Style) -> Table {
    let mut table = Table::new();
    table.load_preset(if style.uses_unicode() {
        UTF8_FULL
    } else {
        ASCII_FULL
    });
    if style.uses_color() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

pub fn render_status_table(params: &ParameterSet, style: &Style) -> String {
    let mut table = new_table(style);
    table.set_header(vec!["Parameter", "Value", "Normal", "Status"]);
    for (key, value) in params.entries() {
        let descriptor = catalog::descriptor(key);
        let status = scoring::status(key, value);
        let color = match status {
            ParameterStatus::Good => Color::Green,
            ParameterStatus::Warning => Color::Yellow,
            ParameterStatus::Unknown => Color::Grey,
        };
        table.add_row(vec![
            Cell::new(descriptor.name),
            Cell::new(descriptor.format_value(value)).fg(color),
            Cell::new(descriptor.normal_range),
            Cell::new(status_word(status)).fg(color),
        ]);
    }
    table.to_string()
}

pub fn render_catalog_table(style: &Style) -> String {
    let mut table = new_table(style);
    table.set_header(vec!["Key", "Name", "Unit", "Normal", "Min", "Max", "Description"]);
    for d in catalog::descriptors() {
        table.add_row(vec![
            d.key.as_str().to_string(),
            d.name.to_string(),
            d.unit.to_string(),
            d.normal_range.to_string(),
            d.min.to_string(),
            d.max.to_string(),
            d.description.to_string(),
        ]);
    }
    table.to_string()
}

fn status_word(status: ParameterStatus) -> &'static str {
    match status {
        ParameterStatus::Good => "good",
        ParameterStatus::Warning => "warning",
        ParameterStatus::Unknown => "unknown",
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, value: &serde_json::Value) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result_view(
        &mut self,
        view: ResultView<'_>,
        breakdown: Option<&ScoreBreakdown>,
    ) -> anyhow::Result<()> {
        let value = match view {
            ResultView::Idle => json!({ "status": "idle" }),
            ResultView::Loading => json!({ "status": "loading" }),
            ResultView::Ready(result) => {
                let mut value = serde_json::to_value(result)?;
                if let (Some(breakdown), Some(object)) = (breakdown, value.as_object_mut()) {
                    object.insert("breakdown".to_string(), serde_json::to_value(breakdown)?);
                }
                value
            }
        };
        self.emit(&value)
    }

    fn write_validation(&mut self, errors: &ValidationErrors) -> anyhow::Result<()> {
        self.emit(&json!({ "valid": errors.is_empty(), "errors": errors }))
    }

    fn write_status(&mut self, params: &ParameterSet) -> anyhow::Result<()> {
        let rows: Vec<_> = params
            .entries()
            .map(|(key, value)| {
                let descriptor = catalog::descriptor(key);
                json!({
                    "key": key,
                    "name": descriptor.name,
                    "value": value,
                    "unit": descriptor.unit,
                    "normalRange": descriptor.normal_range,
                    "status": scoring::status(key, value),
                })
            })
            .collect();
        self.emit(&serde_json::Value::Array(rows))
    }

    fn write_catalog(&mut self) -> anyhow::Result<()> {
        let value = serde_json::to_value(catalog::descriptors())?;
        self.emit(&value)
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_result_view(
        &mut self,
        view: ResultView<'_>,
        breakdown: Option<&ScoreBreakdown>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Water Potability Report")?;
        writeln!(self.writer)?;
        let result = match view {
            ResultView::Idle => {
                writeln!(self.writer, "_Ready for Analysis_")?;
                return Ok(());
            }
            ResultView::Loading => {
                writeln!(self.writer, "_Analyzing water quality..._")?;
                return Ok(());
            }
            ResultView::Ready(result) => result,
        };

        writeln!(self.writer, "**Water is {}**", result.label())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Confidence | {} |", result.confidence_percent())?;
        writeln!(
            self.writer,
            "| Analyzed | {} |",
            result.timestamp().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", advice_for(result))?;
        writeln!(self.writer)?;
        self.write_status(result.parameters())?;

        if let Some(breakdown) = breakdown {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Score Breakdown")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Parameter | Delta |")?;
            writeln!(self.writer, "|-----------|-------|")?;
            for c in &breakdown.contributions {
                writeln!(
                    self.writer,
                    "| {} | {:+.2} |",
                    catalog::descriptor(c.key).name,
                    c.delta
                )?;
            }
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Raw score {:.2}, clamped {:.2}.",
                breakdown.raw_score, breakdown.score
            )?;
        }
        Ok(())
    }

    fn write_validation(&mut self, errors: &ValidationErrors) -> anyhow::Result<()> {
        writeln!(self.writer, "## Validation")?;
        writeln!(self.writer)?;
        if errors.is_empty() {
            writeln!(self.writer, "All parameters are within range.")?;
            return Ok(());
        }
        for (key, message) in errors.iter() {
            writeln!(
                self.writer,
                "- **{}**: {}",
                catalog::descriptor(key).name,
                message
            )?;
        }
        Ok(())
    }

    fn write_status(&mut self, params: &ParameterSet) -> anyhow::Result<()> {
        writeln!(self.writer, "## Parameter Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Value | Normal | Status |")?;
        writeln!(self.writer, "|-----------|-------|--------|--------|")?;
        for (key, value) in params.entries() {
            let descriptor = catalog::descriptor(key);
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                descriptor.name,
                descriptor.format_value(value),
                descriptor.normal_range,
                status_word(scoring::status(key, value))
            )?;
        }
        Ok(())
    }

    fn write_catalog(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "## Parameter Catalog")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Key | Name | Unit | Normal | Range |")?;
        writeln!(self.writer, "|-----|------|------|--------|-------|")?;
        for d in catalog::descriptors() {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} | {} - {} |",
                d.key, d.name, d.unit, d.normal_range, d.min, d.max
            )?;
        }
        Ok(())
    }
}
