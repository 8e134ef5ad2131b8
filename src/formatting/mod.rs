use crate::scoring::ParameterStatus;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Use Unicode symbols (●, ✓) rather than ASCII markers
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, unicode: bool) -> Self {
        Self { color, unicode }
    }

    /// Honor NO_COLOR, CLICOLOR and CLICOLOR_FORCE.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            config.color = ColorMode::Always;
        }
        if config.color == ColorMode::Auto && !detect_terminal_support() {
            config.unicode = false;
        }

        config
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }
}

/// Applies the configured colors and symbol set to output text.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
    unicode: bool,
}

impl Style {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self {
            color,
            unicode: config.unicode,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    fn paint(&self, text: &str, f: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn symbol<'a>(&self, unicode: &'a str, ascii: &'a str) -> &'a str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    /// Colored status dot for the visualization panel.
    pub fn status_marker(&self, status: ParameterStatus) -> String {
        match status {
            ParameterStatus::Good => self.good(self.symbol("●", "[ok]")),
            ParameterStatus::Warning => self.warning(self.symbol("●", "[!!]")),
            ParameterStatus::Unknown => self.dim(self.symbol("○", "[??]")),
        }
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    pub fn uses_unicode(&self) -> bool {
        self.unicode
    }
}

fn detect_terminal_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_color_modes() {
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
    }

    #[test]
    fn test_plain_style_leaves_text_alone() {
        let style = Style::plain();
        assert_eq!(style.error("bad"), "bad");
        assert_eq!(style.status_marker(ParameterStatus::Good), "[ok]");
        assert_eq!(style.status_marker(ParameterStatus::Warning), "[!!]");
    }

    #[test]
    fn test_unicode_markers() {
        let style = Style::new(FormattingConfig::new(ColorMode::Never, true));
        assert_eq!(style.status_marker(ParameterStatus::Good), "●");
        assert_eq!(style.symbol("✓", "[OK]"), "✓");
    }
}
