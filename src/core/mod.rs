//! Core processing modules
//!
//! Prompt construction and the completion API client.

pub mod completion;
pub mod prompt;
