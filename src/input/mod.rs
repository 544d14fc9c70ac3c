//! Keystroke injection
//!
//! Provides a unified interface over the two ways of making the focused
//! application copy or paste: a uinput virtual keyboard, or the session's
//! key-simulation tool.

use crate::error::ProofreadResult;
use clap::ValueEnum;
use tracing::info;

pub mod command;
pub mod uinput;

/// Clipboard shortcut to send to the focused window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Ctrl+C
    Copy,
    /// Ctrl+V
    Paste,
}

impl Keystroke {
    /// Chord spelling understood by xdotool and ydotool
    pub fn chord(self) -> &'static str {
        match self {
            Keystroke::Copy => "ctrl+c",
            Keystroke::Paste => "ctrl+v",
        }
    }
}

/// Trait for keystroke backends
pub trait KeystrokeSender {
    /// Deliver the keystroke to whatever window has focus
    fn send(&mut self, keystroke: Keystroke) -> ProofreadResult<()>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Which keystroke backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// ydotool on Wayland, xdotool on X11
    #[default]
    Command,
    /// Virtual keyboard through /dev/uinput
    Uinput,
}

/// Factory to create the requested keystroke backend
pub fn create_sender(backend: Backend) -> ProofreadResult<Box<dyn KeystrokeSender>> {
    let sender: Box<dyn KeystrokeSender> = match backend {
        Backend::Command => Box::new(command::CommandSender::from_env()?),
        Backend::Uinput => Box::new(uinput::UinputSender::new()),
    };
    info!("⌨️ Keystroke backend: {}", sender.name());
    Ok(sender)
}
