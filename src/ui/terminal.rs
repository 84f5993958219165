//! Terminal UI.

use console::Term;
use std::io::{self, Write};

use super::{should_use_colors, OutputMode, PkgcheckTheme, UserInterface};

/// Terminal UI implementation.
///
/// The report goes to stdout; everything else goes to stderr.
pub struct TerminalUI {
    stdout: io::Stdout,
    term: Term,
    theme: PkgcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PkgcheckTheme::new()
        } else {
            PkgcheckTheme::plain()
        };

        Self {
            stdout: io::stdout(),
            term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn report(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_status(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
