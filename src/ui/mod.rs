//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real runs (report on stdout, status on stderr)
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pkgcheck::ui::{MockUI, UserInterface};
//! use std::io::Write;
//!
//! let mut ui = MockUI::new();
//! writeln!(ui.report(), "foo@2.0").unwrap();
//! ui.warning("Skipping bad.yaml");
//!
//! assert_eq!(ui.report_text(), "foo@2.0\n");
//! assert!(ui.has_warning("bad.yaml"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PkgcheckTheme};

use std::io::Write;

/// Trait for user interface interactions.
///
/// The report sink is kept separate from status messages so the report can
/// be piped while diagnostics still reach the user.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Sink for the report itself. Never suppressed by the output mode.
    fn report(&mut self) -> &mut dyn Write;

    /// Display a status message (verbose mode only).
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);
}
