//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures the report and
//! every diagnostic for later assertion.

use std::io::Write;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Messages are captured regardless of output mode so tests can assert on
/// what a command tried to say.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    report: Vec<u8>,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Everything written to the report sink, as text.
    pub fn report_text(&self) -> String {
        String::from_utf8_lossy(&self.report).into_owned()
    }

    /// Report lines, in write order.
    pub fn report_lines(&self) -> Vec<String> {
        self.report_text().lines().map(str::to_string).collect()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn report(&mut self) -> &mut dyn Write {
        &mut self.report
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
