//! Session-aware key simulation through external tools
//!
//! Wayland sessions go through `ydotool`, X11 sessions through `xdotool`.

use super::{Keystroke, KeystrokeSender};
use crate::error::{ProofreadError, ProofreadResult};
use std::process::Command;
use tracing::debug;

pub const SESSION_ENV: &str = "XDG_SESSION_TYPE";

/// Display server protocol of the desktop session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Wayland,
    X11,
}

impl SessionType {
    /// Parse an `XDG_SESSION_TYPE` value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "wayland" => Some(SessionType::Wayland),
            "x11" => Some(SessionType::X11),
            _ => None,
        }
    }

    /// Read the session type from the environment
    pub fn detect() -> ProofreadResult<Self> {
        let value = std::env::var(SESSION_ENV).unwrap_or_default();
        Self::parse(&value).ok_or(ProofreadError::UnsupportedSession(value))
    }
}

/// Sends keystrokes by running the session's key-simulation tool
#[derive(Debug, Clone)]
pub struct CommandSender {
    session: SessionType,
}

impl CommandSender {
    pub fn new(session: SessionType) -> Self {
        Self { session }
    }

    pub fn from_env() -> ProofreadResult<Self> {
        Ok(Self::new(SessionType::detect()?))
    }

    pub fn session(&self) -> SessionType {
        self.session
    }

    /// Program and arguments for one keystroke
    pub fn invocation(&self, keystroke: Keystroke) -> (&'static str, Vec<&'static str>) {
        match self.session {
            SessionType::Wayland => ("ydotool", vec!["key", "--repeat", "1", keystroke.chord()]),
            SessionType::X11 => (
                "xdotool",
                vec!["key", "--repeat", "1", "--clearmodifiers", keystroke.chord()],
            ),
        }
    }
}

impl KeystrokeSender for CommandSender {
    fn send(&mut self, keystroke: Keystroke) -> ProofreadResult<()> {
        let (program, args) = self.invocation(keystroke);
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(&args)
            .output()
            .map_err(|e| ProofreadError::InputInjection(format!("failed to run {program}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProofreadError::InputInjection(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.session {
            SessionType::Wayland => "ydotool",
            SessionType::X11 => "xdotool",
        }
    }
}
