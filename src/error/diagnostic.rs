//! Diagnostic formatting for terminal output
//!
//! Renders a `NovaError` with a colored header, its location and an
//! excerpt of the offending source with a caret under the failing column.

use super::{NovaError, SourceLocation};
use colored::Colorize;

/// How loudly a diagnostic is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Aborted the pipeline (lexical and construction errors)
    Error,
    /// Absorbed by the parser into a "no result"
    Warning,
}

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a NovaError,
    severity: Severity,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a NovaError) -> Self {
        Self {
            error,
            severity: Severity::Error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a NovaError, source: &'a str) -> Self {
        Self {
            error,
            severity: Severity::Error,
            source: Some(source),
        }
    }

    /// Report the diagnostic as a warning instead of an error
    pub fn as_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = match self.severity {
            Severity::Error => self.error.kind().red().bold(),
            Severity::Warning => self.error.kind().yellow().bold(),
        };
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        if let Some(location) = self.error.location() {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(source) = self.source {
                output.push_str(&self.format_source_context(source, location));
            }
        }

        output
    }

    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let lines: Vec<&str> = source.lines().collect();
        if location.line == 0 || location.line > lines.len() {
            return String::new();
        }

        let mut output = String::new();
        let line_idx = location.line - 1;
        let width = (location.line + 1).to_string().len();
        let gutter = |n: usize| format!("{:width$}", n, width = width);

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                gutter(line_idx).blue(),
                lines[line_idx - 1]
            ));
        }

        let line = lines[line_idx];
        output.push_str(&format!("  {} {}\n", gutter(location.line).blue().bold(), line));

        // End-of-input positions may sit one past the last character.
        let column = location.column.clamp(1, line.chars().count() + 1);
        let padding = " ".repeat(width + 2 + column);
        let caret = match self.severity {
            Severity::Error => "^".red().bold(),
            Severity::Warning => "^".yellow().bold(),
        };
        output.push_str(&format!("{}{}\n", padding, caret));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                gutter(line_idx + 2).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
