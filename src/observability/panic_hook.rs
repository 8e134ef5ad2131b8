//! Custom panic hook for structured crash reports.
//!
//! A crash report names the classification phase, any detail recorded for
//! it, the outcome counters and where the panic happened.

use super::context::{classification_counts, get_current_context, OperationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════";

/// Install the crash-report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", render_crash_report(info));
    }));
}

fn render_crash_report(info: &PanicHookInfo<'_>) -> String {
    let context = get_current_context();
    let (succeeded, failed) = classification_counts();

    let mut lines = vec![
        String::new(),
        RULE.to_string(),
        "POTABILITY CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("Version:  {}", VERSION),
        format!("Platform: {}", std::env::consts::OS),
        format!(
            "Time:     {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Panic:    {}", extract_panic_message(info)),
    ];
    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    lines.push(RULE.to_string());
    lines.extend(context_lines(&context, succeeded, failed));
    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("Span:     {}", metadata.name()));
    }

    lines.push(RULE.to_string());
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for a stack trace".to_string());
    }
    lines.join("\n")
}

fn context_lines(context: &OperationContext, succeeded: usize, failed: usize) -> Vec<String> {
    let mut lines = vec![match &context.phase {
        Some(phase) => format!("Phase:    {}", phase),
        None => "Phase:    (not set - crash occurred before any classification step)".to_string(),
    }];
    if let Some(detail) = &context.detail {
        lines.push(format!("Detail:   {}", detail));
    }
    lines.push(format!(
        "Classifications: {} succeeded, {} failed",
        succeeded, failed
    ));
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
