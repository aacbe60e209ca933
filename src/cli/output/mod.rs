//! Output formatting module for CLI

pub mod json;
mod terminal;
mod text;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;
pub use text::TextOutput;

pub use crate::io::ReportRenderer;
