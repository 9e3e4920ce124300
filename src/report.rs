//! Captured process results and structured task reports.

use serde::{Deserialize, Serialize};
use std::io;
use std::process::{Command, ExitStatus};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Output capture mode for task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream directly to terminal (default for CLI use).
    #[default]
    Stream,

    /// Capture output silently and format as a structured result.
    /// Output is suppressed during execution and only the formatted result
    /// is printed at the end.
    Structured,
}

/// Result of a single external process invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// The command that was executed.
    pub command: String,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Process exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration in milliseconds.
    pub duration_ms: u128,

    /// Timestamp when execution started (Unix epoch ms).
    pub started_at: u128,
}

impl Invocation {
    /// Run `cmd` to completion, capturing both output streams.
    ///
    /// `display_command` is the command line recorded in the result.
    pub fn capture(cmd: &mut Command, display_command: &str) -> io::Result<Self> {
        Self::capture_with_status(cmd, display_command).map(|(invocation, _)| invocation)
    }

    /// Like [`Invocation::capture`], but also returns the raw exit status so
    /// the caller can distinguish signal termination from a normal exit.
    pub fn capture_with_status(
        cmd: &mut Command,
        display_command: &str,
    ) -> io::Result<(Self, ExitStatus)> {
        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        let start = Instant::now();

        let output = cmd.output()?;

        let invocation = Self {
            command: display_command.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            duration_ms: start.elapsed().as_millis(),
            started_at,
        };
        Ok((invocation, output.status))
    }

    /// Whether the process exited with status 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Complete structured result for one CLI task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    /// The task that was invoked (`run`, `build`, `format`).
    pub task: String,

    /// Individual process invocations (in execution order).
    pub outputs: Vec<Invocation>,

    /// Overall success (all invocations exited 0).
    pub success: bool,

    /// Total execution time.
    pub total_duration_ms: u128,

    /// Human-readable summary.
    pub summary: String,
}

impl TaskReport {
    /// Create from a collection of invocations.
    #[must_use]
    pub fn from_outputs(task: &str, outputs: Vec<Invocation>) -> Self {
        let success = outputs.iter().all(Invocation::success);
        let total_duration_ms = outputs.iter().map(|o| o.duration_ms).sum();

        let summary = if success {
            format!(
                "Task {} completed with {} command(s)",
                task,
                outputs.len()
            )
        } else {
            format!("Task {task} failed")
        };

        Self {
            task: task.to_string(),
            outputs,
            success,
            total_duration_ms,
            summary,
        }
    }

    /// Format as JSON for programmatic consumption.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Format as Markdown for human readability.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## Task: `{}`\n\n", self.task));
        md.push_str(&format!(
            "**Status:** {}\n",
            if self.success { "✓ Success" } else { "✗ Failed" }
        ));
        md.push_str(&format!("**Duration:** {}ms\n\n", self.total_duration_ms));

        for (i, output) in self.outputs.iter().enumerate() {
            md.push_str(&format!("### Step {} ({}ms)\n", i + 1, output.duration_ms));
            md.push_str(&format!("`{}`\n\n", output.command));

            if !output.stdout.is_empty() {
                md.push_str("**Output:**\n```\n");
                md.push_str(&output.stdout);
                md.push_str("```\n\n");
            }

            if !output.stderr.is_empty() {
                md.push_str("**Errors:**\n```\n");
                md.push_str(&output.stderr);
                md.push_str("```\n\n");
            }

            if let Some(code) = output.exit_code {
                if code != 0 {
                    md.push_str(&format!("**Exit Code:** {code}\n\n"));
                }
            }
        }

        md
    }
}
