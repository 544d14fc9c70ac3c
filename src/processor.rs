//! Proofread Processor
//!
//! Runs one copy → complete → paste cycle against the focused window.
//! Failures come back as `ProofreadError`; deciding the exit code is left
//! to the caller.

use crate::clipboard::ClipboardAccess;
use crate::config::Config;
use crate::core::completion::CompletionBackend;
use crate::core::prompt::{build_prompt, normalize_selection, INSTRUCTION_SUFFIX};
use crate::error::{ProofreadError, ProofreadResult};
use crate::input::{Keystroke, KeystrokeSender};
use tracing::{debug, info, warn};

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was replaced with the model's answer
    Replaced,
    /// Nothing was selected; nothing was sent
    NoSelection,
}

pub struct Proofreader {
    config: Config,
    keys: Box<dyn KeystrokeSender>,
    clipboard: Box<dyn ClipboardAccess>,
    completion: Box<dyn CompletionBackend>,
}

impl Proofreader {
    pub fn new(
        config: Config,
        keys: Box<dyn KeystrokeSender>,
        clipboard: Box<dyn ClipboardAccess>,
        completion: Box<dyn CompletionBackend>,
    ) -> Self {
        Self {
            config,
            keys,
            clipboard,
            completion,
        }
    }

    /// Copy the selection, rewrite it and paste the result over it
    pub async fn run(&mut self) -> ProofreadResult<Outcome> {
        let Some(selection) = self.capture_selection().await? else {
            warn!("No text selected.");
            return Ok(Outcome::NoSelection);
        };

        let prompt = build_prompt(&self.config.prompt, INSTRUCTION_SUFFIX, &selection);
        info!(
            "Sending text to completion API using model: {}",
            self.completion.model()
        );
        let result = self.completion.complete(&prompt).await?;

        if result.is_empty() {
            return Err(ProofreadError::EmptyResult);
        }

        info!("Replacing selected text with AI output...");
        self.replace_selection(&result).await?;
        info!("Text replaced successfully");
        Ok(Outcome::Replaced)
    }

    async fn capture_selection(&mut self) -> ProofreadResult<Option<String>> {
        info!("Copying selection via {}", self.keys.name());
        self.keys.send(Keystroke::Copy)?;
        tokio::time::sleep(self.config.settle_delay()).await;

        let raw = self.clipboard.get_text()?;
        let selection = normalize_selection(&raw).map(str::to_string);
        if let Some(text) = &selection {
            debug!("Captured {} characters", text.chars().count());
        }
        Ok(selection)
    }

    async fn replace_selection(&mut self, text: &str) -> ProofreadResult<()> {
        self.clipboard.set_text(text)?;
        self.keys.send(Keystroke::Paste)?;
        // The focused app fetches the clipboard after the keystroke lands
        tokio::time::sleep(self.config.settle_delay()).await;
        Ok(())
    }
}
