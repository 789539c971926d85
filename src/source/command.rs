use crate::config::SourceConfig;
use crate::error::{Result, VersionDeterminerError};
use crate::source::VersionSource;
use crate::ui;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Version source that asks the build tool, e.g.
/// `mvn help:evaluate -Dexpression=project.version -q -DforceStdout`
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandSource {
    /// Create a source running `program` with `args` in the current directory
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandSource {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    /// Build a source from the `[source]` configuration section
    pub fn from_config(config: &SourceConfig) -> Self {
        CommandSource {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Run the command in `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl VersionSource for CommandSource {
    /// Run the build tool and return whatever it printed.
    ///
    /// Blocks until the process exits. A non-zero exit status is only reported
    /// as a warning: stdout is returned either way and dissection decides
    /// whether it is usable.
    fn current_version(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            VersionDeterminerError::source_failed(format!(
                "Failed to run {}: {}",
                self.describe(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            ui::display_warning(&format!(
                "{} exited with code {}{}",
                self.describe(),
                output.status.code().unwrap_or(-1),
                if stderr.trim().is_empty() {
                    String::new()
                } else {
                    format!("\nStderr: {}", stderr.trim())
                }
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        format!("`{}`", line)
    }
}
