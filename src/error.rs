//! Error types for the build, run and format components.
//!
//! Components return these without printing anything; all user-facing
//! formatting happens in the CLI layer.

use std::io;
use std::path::PathBuf;

/// Errors produced by the Builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("build tool `{tool}` not found on PATH")]
    ToolNotFound { tool: String },

    #[error("could not create build directory `{}`: {source}", .path.display())]
    BuildDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran and reported failure. Carries both captured streams
    /// verbatim for the CLI layer to surface.
    #[error("build failed{}", exit_label(.code))]
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Errors produced by the Runner.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The build reported success but the expected artifact is absent,
    /// which points at a mode/path mismatch rather than a spawn problem.
    #[error("build succeeded but executable `{}` does not exist", .path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("failed to launch `{}`: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("process terminated by signal{}", signal_label(.signal))]
    Terminated { signal: Option<i32> },
}

/// Errors produced by the Formatter.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("formatter `{tool}` not found on PATH")]
    ToolNotFound { tool: String },

    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("formatting failed{}", exit_label(.code))]
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (killed by signal)".to_string(),
    }
}

fn signal_label(signal: &Option<i32>) -> String {
    match signal {
        Some(signal) => format!(" {signal}"),
        None => String::new(),
    }
}
