/*!
 * System clipboard placement
 *
 * Copies text to the clipboard by piping it to whichever clipboard tool the
 * platform offers, detected once per process.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Known clipboard tools, in rough order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOs,
    Windows,
    Termux,
}

impl Provider {
    /// Command line that accepts clipboard text on stdin
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Windows => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    /// Whether this provider can be used on the current system
    fn available(self) -> bool {
        match self {
            // tmux only helps when a server is actually running
            Self::Tmux => env::var("TMUX").is_ok() && command_exists("tmux"),
            other => command_exists(other.command().0),
        }
    }

    /// Providers worth probing on this platform
    fn candidates() -> &'static [Provider] {
        if cfg!(target_os = "macos") {
            &[Self::Tmux, Self::MacOs]
        } else if cfg!(target_os = "windows") {
            &[Self::Windows]
        } else if cfg!(target_os = "android") {
            &[Self::Termux]
        } else if env::var("WSL_DISTRO_NAME").is_ok() {
            &[Self::Tmux, Self::Windows]
        } else {
            &[Self::Tmux, Self::Wayland, Self::Xsel, Self::Xclip]
        }
    }
}

/// Copy text to the system clipboard.
///
/// Detects the most appropriate clipboard mechanism for the platform and
/// pipes the text to it. Detection runs once and is cached for the life of
/// the process.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    static DETECTED: OnceLock<Option<Provider>> = OnceLock::new();

    let provider = DETECTED
        .get_or_init(|| Provider::candidates().iter().copied().find(|p| p.available()))
        .ok_or(ClipboardError::NoClipboardFound)?;

    let (cmd, args) = provider.command();
    pipe_to_command(cmd, args, text)
}

/// Check if a command can be found on the system
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for dir in paths.split(':') {
            if Path::new(dir).join(command).exists() {
                return true;
            }
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Spawn a command and write `text` to its stdin
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd)))?
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
