//! Check command implementation.
//!
//! The check command validates both inputs, collects every declared
//! `name@version`, and reports the ones missing from the installed list.

use std::path::Path;

use crate::cli::args::CheckArgs;
use crate::declaration::collect_records;
use crate::differ::report_missing;
use crate::error::{PkgcheckError, Result};
use crate::installed::InstalledList;
use crate::paths::{validate_path, PathKind};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// Exit code for an invalid input path.
const INVALID_PATH_EXIT: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn validate_inputs(&self) -> Result<()> {
        validate_path(&self.args.declarations_dir, PathKind::Directory)?;
        validate_path(&self.args.installed_list, PathKind::File)?;
        Ok(())
    }

    fn declarations_dir(&self) -> &Path {
        &self.args.declarations_dir
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.validate_inputs() {
            Ok(()) => {}
            Err(e @ PkgcheckError::InvalidPath { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(INVALID_PATH_EXIT));
            }
            Err(e) => return Err(e),
        }

        let collection = collect_records(self.declarations_dir(), &self.args.scan_options())?;
        for skipped in &collection.skipped {
            ui.warning(&format!(
                "Skipping {}: {}",
                skipped.path.display(),
                skipped.reason
            ));
        }

        let installed = InstalledList::load(&self.args.installed_list)?;

        let missing = report_missing(
            &collection.records,
            &installed,
            self.args.report_format(),
            ui.report(),
        )?;

        ui.message(&format!(
            "{} of {} declared package(s) missing",
            missing,
            collection.records.len()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        decls: PathBuf,
        installed: PathBuf,
    }

    fn setup(declarations: &[(&str, &str)], installed: &str) -> Fixture {
        let temp = TempDir::new().unwrap();
        let decls = temp.path().join("decls");
        fs::create_dir(&decls).unwrap();
        for (file, content) in declarations {
            fs::write(decls.join(file), content).unwrap();
        }
        let installed_path = temp.path().join("installed.txt");
        fs::write(&installed_path, installed).unwrap();

        Fixture {
            _temp: temp,
            decls,
            installed: installed_path,
        }
    }

    fn run(args: CheckArgs) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = CheckCommand::new(args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn check_command_creation() {
        let cmd = CheckCommand::new(CheckArgs::new("decls", "installed.txt"));
        assert_eq!(cmd.args().declarations_dir, PathBuf::from("decls"));
    }

    #[test]
    fn reports_missing_version() {
        let fx = setup(
            &[("foo.yaml", "versions:\n  1.0: {}\n  2.0: {}\n")],
            "foo@1.0\n",
        );
        let (result, ui) = run(CheckArgs::new(&fx.decls, &fx.installed));

        assert!(result.success);
        assert_eq!(ui.report_lines(), vec!["foo@2.0"]);
    }

    #[test]
    fn nothing_missing_reports_nothing() {
        let fx = setup(&[("bar.yaml", "versions:\n  3.1: {}\n")], "bar@3.1\n");
        let (result, ui) = run(CheckArgs::new(&fx.decls, &fx.installed));

        assert!(result.success);
        assert!(ui.report_text().is_empty());
    }

    #[test]
    fn empty_directory_reports_nothing() {
        let fx = setup(&[], "foo@1.0\n");
        let (result, ui) = run(CheckArgs::new(&fx.decls, &fx.installed));

        assert!(result.success);
        assert!(ui.report_text().is_empty());
    }

    #[test]
    fn summary_message_counts_missing() {
        let fx = setup(
            &[("foo.yaml", "versions:\n  1.0: {}\n  2.0: {}\n")],
            "foo@1.0\n",
        );
        let (_, ui) = run(CheckArgs::new(&fx.decls, &fx.installed));

        assert!(ui.has_message("1 of 2 declared package(s) missing"));
    }

    #[test]
    fn invalid_directory_fails_without_report() {
        let fx = setup(&[], "");
        let missing = fx.decls.join("nope");
        let (result, ui) = run(CheckArgs::new(&missing, &fx.installed));

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Invalid directory"));
        assert!(ui.has_error(&missing.display().to_string()));
        assert!(ui.report_text().is_empty());
    }

    #[test]
    fn invalid_installed_list_fails_without_report() {
        let fx = setup(&[("foo.yaml", "versions:\n  1.0: {}\n")], "");
        let (result, ui) = run(CheckArgs::new(&fx.decls, &fx.decls));

        assert!(!result.success);
        assert!(ui.has_error("Invalid file"));
        assert!(ui.report_text().is_empty());
    }

    #[test]
    fn malformed_declaration_aborts() {
        let fx = setup(
            &[
                ("bad.yaml", "name: bad\n"),
                ("good.yaml", "versions:\n  1.0: {}\n"),
            ],
            "",
        );
        let mut ui = MockUI::new();
        let err = CheckCommand::new(CheckArgs::new(&fx.decls, &fx.installed))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, PkgcheckError::MalformedDeclaration { .. }));
        assert!(ui.report_text().is_empty());
    }

    #[test]
    fn malformed_declaration_skipped_with_warning() {
        let fx = setup(
            &[
                ("bad.yaml", "name: bad\n"),
                ("good.yaml", "versions:\n  1.0: {}\n"),
            ],
            "",
        );
        let mut args = CheckArgs::new(&fx.decls, &fx.installed);
        args.skip_malformed = true;
        let (result, ui) = run(args);

        assert!(result.success);
        assert_eq!(ui.report_lines(), vec!["good@1.0"]);
        assert!(ui.has_warning("bad.yaml"));
    }

    #[test]
    fn json_report() {
        let fx = setup(&[("foo.yaml", "versions:\n  1.0: {}\n")], "");
        let mut args = CheckArgs::new(&fx.decls, &fx.installed);
        args.json = true;
        let (_, ui) = run(args);

        let json: serde_json::Value = serde_json::from_str(&ui.report_text()).unwrap();
        assert_eq!(json[0]["full_id"], "foo@1.0");
    }

    #[test]
    fn running_twice_gives_identical_output() {
        let fx = setup(
            &[
                ("foo.yaml", "versions:\n  1.0: {}\n  2.0: {}\n"),
                ("bar.yaml", "versions:\n  3.1: {}\n  3.2: {}\n"),
            ],
            "bar@3.2\n",
        );
        let (_, first) = run(CheckArgs::new(&fx.decls, &fx.installed));
        let (_, second) = run(CheckArgs::new(&fx.decls, &fx.installed));

        assert_eq!(first.report_text(), second.report_text());
        assert_eq!(first.report_lines(), vec!["bar@3.1", "foo@1.0", "foo@2.0"]);
    }
}
