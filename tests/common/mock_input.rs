//! Mock keystroke backend
//!
//! Records every keystroke; clones share the record.

use selectionproofread::error::{ProofreadError, ProofreadResult};
use selectionproofread::input::{Keystroke, KeystrokeSender};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct MockKeys {
    pub sent: Arc<Mutex<Vec<Keystroke>>>,
    /// Fail when this keystroke is sent
    pub fail_on: Option<Keystroke>,
}

impl MockKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(keystroke: Keystroke) -> Self {
        Self {
            fail_on: Some(keystroke),
            ..Self::default()
        }
    }

    pub fn get_sent(&self) -> Vec<Keystroke> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self, keystroke: Keystroke) -> usize {
        self.get_sent().iter().filter(|k| **k == keystroke).count()
    }
}

impl KeystrokeSender for MockKeys {
    fn send(&mut self, keystroke: Keystroke) -> ProofreadResult<()> {
        if self.fail_on == Some(keystroke) {
            return Err(ProofreadError::InputInjection(
                "mock device unavailable".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(keystroke);
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
