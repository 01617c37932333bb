//! Command handlers for the CLI.

mod completions;
mod convert;

pub use completions::handle_completions;
pub use convert::handle_convert;
