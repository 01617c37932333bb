//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic export creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::KeepportCommand;
#[allow(unused_imports)]
pub use env::{ARCHIVE_FILE, OUTPUT_DIR, SOURCE_FILE, TestEnv};
#[allow(unused_imports)]
pub use note::TestNote;
