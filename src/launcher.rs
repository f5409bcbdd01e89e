// imgresize/src/launcher.rs
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },
}

/// Opens a file with the desktop's default application.
pub trait Opener {
    fn command(&self, path: &Path) -> Command;

    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        let mut command = self.command(path);
        let program = command.get_program().to_string_lossy().into_owned();

        log::debug!("Launching {:?}", command);

        let status = command.status().map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Status { program, status })
        }
    }
}

pub struct MacOpener;

impl Opener for MacOpener {
    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new("open");
        command.arg(path);
        command
    }
}

pub struct WindowsOpener;

impl Opener for WindowsOpener {
    fn command(&self, path: &Path) -> Command {
        // `start` is a cmd builtin; the empty string is the window title.
        let mut command = Command::new("cmd");
        command.args([OsStr::new("/C"), OsStr::new("start"), OsStr::new("")]);
        command.arg(path);
        command
    }
}

pub struct XdgOpener;

impl Opener for XdgOpener {
    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "ios" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    pub fn opener(self) -> Box<dyn Opener> {
        match self {
            Platform::MacOs => Box::new(MacOpener),
            Platform::Windows => Box::new(WindowsOpener),
            Platform::Other => Box::new(XdgOpener),
        }
    }
}

/// Best-effort open of `path`; failures are printed, never returned.
pub fn open_with_default_app(path: &Path) {
    if let Err(e) = Platform::detect().opener().open(path) {
        log::warn!("Opening {} failed: {}", path.display(), e);
        println!("Could not open image automatically: {}", e);
        println!("You can manually open: {}", path.display());
    }
}
