//! Runner for the companion command-line tool.
//!
//! The tool reports failure by convention: captured stdout beginning with
//! the literal prefix `Error:`. Exit status is not separately inspected.
//! The classifier lives in [`classify`] so the convention can be swapped if
//! the tool's output format ever changes.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

mod classify;
pub use self::classify::classify_output;

#[derive(Clone)]
pub struct ToolRunner {
    program: PathBuf,
}

impl ToolRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the tool and classifies its captured stdout. Success output is
    /// returned for the caller to display or ignore.
    pub fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String> {
        tracing::debug!(program = %self.program.display(), ?args, "invoke tool");
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd.output().map_err(|err| {
            Error::Config(format!(
                "cannot run `{}` ({err}); is the companion tool installed?",
                self.program.display()
            ))
        })?;
        classify_output(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// `configure --token=<t> --workspace=<dir>`. Output is ignored on
    /// success.
    pub fn configure(&self, token: &str, workspace: &Path) -> Result<()> {
        self.run(
            &[
                "configure",
                &format!("--token={token}"),
                &format!("--workspace={}", workspace.display()),
            ],
            None,
        )?;
        Ok(())
    }

    /// `download --track=<t> --exercise=<e> --force`. The `--force` flag is
    /// the tool's own overwrite switch; download avoidance happens a layer
    /// up, in the workspace cache.
    pub fn download(&self, track: &str, exercise: &str) -> Result<()> {
        self.run(
            &[
                "download",
                &format!("--track={track}"),
                &format!("--exercise={exercise}"),
                "--force",
            ],
            None,
        )?;
        Ok(())
    }

    /// `test`, run inside the exercise directory. Output is shown to the
    /// user either way.
    pub fn test(&self, exercise_dir: &Path) -> Result<String> {
        self.run(&["test"], Some(exercise_dir))
    }

    /// `submit`, run inside the exercise directory.
    pub fn submit(&self, exercise_dir: &Path) -> Result<String> {
        self.run(&["submit"], Some(exercise_dir))
    }
}
