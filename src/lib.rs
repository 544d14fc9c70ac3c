//! SelectionProofread Library
//!
//! Core modules for rewriting the current desktop selection with a
//! chat-completion model.

pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod processor;
