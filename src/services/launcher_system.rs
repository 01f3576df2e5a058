use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::Launcher;

/// Opens files by spawning the platform's default-application helper.
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher {
    command: Option<String>,
}

impl SystemLauncher {
    /// `command` overrides the platform default when set.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn build(&self, path: &Path) -> Command {
        if let Some(program) = &self.command {
            let mut command = Command::new(program);
            command.arg(path);
            return command;
        }
        default_command(path)
    }
}

#[cfg(target_os = "macos")]
fn default_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(windows)]
fn default_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", windows)))]
fn default_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> Result<(), AppError> {
        let launch_error =
            |details: String| AppError::Launch { path: PathBuf::from(path), details };

        let mut command = self.build(path);
        log::debug!("launching {:?}", command);
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| launch_error(err.to_string()))?;

        if !status.success() {
            return Err(launch_error(format!("launcher exited with {}", status)));
        }
        Ok(())
    }
}
