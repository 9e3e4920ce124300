//! # tasks
//!
//! Developer-convenience CLI for the hyoga project.
//!
//! ## Usage
//!
//! - Build and run: `tasks run`, `tasks run -d`
//! - Build only: `tasks build`, `tasks build -d`
//! - Format sources: `tasks format`
//!
//! See README.md for more details.

/// Entry point for the CLI tool.
fn main() {
    tasks::cli::run_cli();
}
