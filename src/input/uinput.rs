//! Input simulation using Linux evdev/uinput
//!
//! Native key simulation without X11 dependencies. Works on both X11 and
//! Wayland, but needs write access to /dev/uinput.

use super::{Keystroke, KeystrokeSender};
use crate::error::{ProofreadError, ProofreadResult};
use anyhow::{Context, Result};
use evdev::{uinput::VirtualDeviceBuilder, AttributeSet, EventType, InputEvent, Key};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Compositors drop events from a device they have not enumerated yet
const DEVICE_SETTLE: Duration = Duration::from_millis(100);

impl Keystroke {
    /// Keys of the combination, modifiers first
    pub fn keys(self) -> [Key; 2] {
        match self {
            Keystroke::Copy => [Key::KEY_LEFTCTRL, Key::KEY_C],
            Keystroke::Paste => [Key::KEY_LEFTCTRL, Key::KEY_V],
        }
    }
}

/// Virtual keyboard able to type exactly one key combination
pub struct VirtualKeyboard {
    device: evdev::uinput::VirtualDevice,
}

impl VirtualKeyboard {
    /// Create a new virtual keyboard device registering `keys`
    pub fn new(keys: &[Key]) -> Result<Self> {
        let mut set = AttributeSet::<Key>::new();
        for key in keys {
            set.insert(*key);
        }

        let device = VirtualDeviceBuilder::new()
            .context("Failed to open /dev/uinput")?
            .name("SelectionProofread Virtual Keyboard")
            .with_keys(&set)?
            .build()
            .context("Failed to create virtual keyboard")?;

        debug!("⌨️ Virtual keyboard created");
        Ok(Self { device })
    }

    /// Type a key combination: press in order, release in reverse, then sync
    pub fn key_combo(&mut self, keys: &[Key]) -> Result<()> {
        let events = combo_events(keys);
        // emit() appends the SYN_REPORT
        self.device
            .emit(&events)
            .context("Failed to emit key events")?;
        Ok(())
    }
}

/// Key-down events in order followed by key-up events in reverse
pub fn combo_events(keys: &[Key]) -> Vec<InputEvent> {
    let presses = keys
        .iter()
        .map(|key| InputEvent::new(EventType::KEY, key.code(), 1));
    let releases = keys
        .iter()
        .rev()
        .map(|key| InputEvent::new(EventType::KEY, key.code(), 0));
    presses.chain(releases).collect()
}

/// Sends keystrokes through a short-lived uinput device.
///
/// The device only exists for the duration of one `send`; dropping it
/// destroys the device on every path, including errors.
#[derive(Debug, Default)]
pub struct UinputSender;

impl UinputSender {
    pub fn new() -> Self {
        Self
    }

    fn type_combo(keys: &[Key]) -> Result<()> {
        let mut keyboard = VirtualKeyboard::new(keys)?;
        thread::sleep(DEVICE_SETTLE);
        keyboard.key_combo(keys)
    }
}

impl KeystrokeSender for UinputSender {
    fn send(&mut self, keystroke: Keystroke) -> ProofreadResult<()> {
        debug!("uinput: {}", keystroke.chord());
        Self::type_combo(&keystroke.keys())
            .map_err(|e| ProofreadError::InputInjection(format!("{e:#}")))
    }

    fn name(&self) -> &str {
        "uinput"
    }
}
