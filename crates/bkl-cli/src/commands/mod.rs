//! Command implementations.

mod completions;
mod wiki;

pub use completions::CompletionsCommand;
pub use wiki::{WikiAction, WikiCommand};
