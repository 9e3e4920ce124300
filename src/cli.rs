//! CLI module containing the main entry point logic.
//!
//! All user-facing printing and exit-code mapping lives here; the build, run
//! and format components only return values and errors.

use crate::error::{BuildError, FormatError, RunError};
use crate::project::{BuildMode, Project};
use crate::report::{OutputMode, TaskReport};
use crate::{build, format, run};
use clap::{Parser as ClapParser, Subcommand};
use std::process;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the tasks tool.
#[derive(ClapParser)]
#[command(name = "tasks")]
#[command(version = PKG_VERSION)]
#[command(about = "Build-and-run tasks for the hyoga project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    task: Task,

    /// Output format for task execution (stream, json, markdown)
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "stream",
        global = true
    )]
    output_format: OutputFormatArg,
}

/// Available tasks.
#[derive(Subcommand)]
enum Task {
    /// Build the project, then launch the produced executable
    Run {
        /// Build and launch the debug variant
        #[arg(short = 'd', long)]
        debug: bool,
    },
    /// Build the project
    Build {
        /// Build the debug variant
        #[arg(short = 'd', long)]
        debug: bool,
    },
    /// Format the source tree
    Format,
}

/// Output format for task execution
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Stream output directly to terminal (default)
    Stream,
    /// Capture and output as JSON
    Json,
    /// Capture and output as Markdown
    Markdown,
}

impl OutputFormatArg {
    /// Get the output mode for this format
    #[must_use]
    pub fn mode(self) -> OutputMode {
        match self {
            Self::Stream => OutputMode::Stream,
            Self::Json | Self::Markdown => OutputMode::Structured,
        }
    }

    /// Format a structured result according to this format
    /// Returns None for Stream mode (no structured output)
    #[must_use]
    pub fn format_result(self, report: &TaskReport) -> Option<String> {
        match self {
            Self::Stream => None,
            Self::Json => Some(report.to_json()),
            Self::Markdown => Some(report.to_markdown()),
        }
    }
}

/// Main CLI logic that can be called from external wrappers.
pub fn run_cli() {
    let cli = Cli::parse();
    let project = Project::default();
    process::exit(dispatch(&cli, &project));
}

fn dispatch(cli: &Cli, project: &Project) -> i32 {
    match cli.task {
        Task::Run { debug } => run_task(
            BuildMode::from_debug_flag(debug),
            cli.output_format,
            project,
        ),
        Task::Build { debug } => build_task(
            BuildMode::from_debug_flag(debug),
            cli.output_format,
            project,
        ),
        Task::Format => format_task(cli.output_format, project),
    }
}

fn run_task(mode: BuildMode, format: OutputFormatArg, project: &Project) -> i32 {
    match run::run(mode, format.mode(), project) {
        Ok(outcome) => {
            let exit_code = outcome.exit_code;

            let mut outputs = vec![outcome.build];
            outputs.extend(outcome.target);
            match format.format_result(&TaskReport::from_outputs("run", outputs)) {
                Some(formatted) => println!("{formatted}"),
                None => println!("Process exited with code {exit_code}"),
            }

            exit_code
        }
        Err(err) => {
            report_run_error(&err);
            1
        }
    }
}

fn build_task(mode: BuildMode, format: OutputFormatArg, project: &Project) -> i32 {
    match build::build(mode, project) {
        Ok(invocation) => {
            match format.format_result(&TaskReport::from_outputs("build", vec![invocation.clone()]))
            {
                Some(formatted) => println!("{formatted}"),
                None => {
                    if !invocation.stdout.is_empty() {
                        print!("{}", invocation.stdout);
                    }
                }
            }
            0
        }
        Err(err) => {
            report_build_error(&err);
            1
        }
    }
}

fn format_task(format: OutputFormatArg, project: &Project) -> i32 {
    match format::format_sources(project) {
        Ok(invocation) => {
            match format.format_result(&TaskReport::from_outputs(
                "format",
                vec![invocation.clone()],
            )) {
                Some(formatted) => println!("{formatted}"),
                None => {
                    // Pass through whatever the formatter printed.
                    if !invocation.stdout.is_empty() {
                        print!("{}", invocation.stdout);
                    }
                    if !invocation.stderr.is_empty() {
                        eprint!("{}", invocation.stderr);
                    }
                }
            }
            0
        }
        Err(err) => {
            report_format_error(&err);
            1
        }
    }
}

/// Print a build failure, surfacing the tool's own streams verbatim first.
fn report_build_error(err: &BuildError) {
    if let BuildError::Failed { stdout, stderr, .. } = err {
        if !stdout.is_empty() {
            print!("{stdout}");
        }
        if !stderr.is_empty() {
            eprint!("{stderr}");
        }
    }
    eprintln!("Error: {err}");
}

fn report_run_error(err: &RunError) {
    match err {
        RunError::Build(build_err) => report_build_error(build_err),
        other => eprintln!("Error: {other}"),
    }
}

fn report_format_error(err: &FormatError) {
    if let FormatError::Failed { stdout, stderr, .. } = err {
        if !stdout.is_empty() {
            print!("{stdout}");
        }
        if !stderr.is_empty() {
            eprint!("{stderr}");
        }
    }
    eprintln!("Error: {err}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_stream_mode() {
        assert_eq!(OutputFormatArg::Stream.mode(), OutputMode::Stream);
    }

    #[test]
    fn test_output_format_json_mode() {
        assert_eq!(OutputFormatArg::Json.mode(), OutputMode::Structured);
    }

    #[test]
    fn test_output_format_markdown_mode() {
        assert_eq!(OutputFormatArg::Markdown.mode(), OutputMode::Structured);
    }

    #[test]
    fn test_format_result_stream_returns_none() {
        let report = TaskReport::from_outputs("build", vec![]);
        assert!(OutputFormatArg::Stream.format_result(&report).is_none());
    }

    #[test]
    fn test_format_result_json_returns_json() {
        let report = TaskReport::from_outputs("build", vec![]);
        let formatted = OutputFormatArg::Json.format_result(&report).unwrap();
        assert!(formatted.contains("\"task\": \"build\""));
    }

    #[test]
    fn test_format_result_markdown_returns_markdown() {
        let report = TaskReport::from_outputs("build", vec![]);
        let formatted = OutputFormatArg::Markdown.format_result(&report).unwrap();
        assert!(formatted.contains("## Task: `build`"));
    }

    #[test]
    fn test_parses_run_with_debug_flag() {
        let cli = Cli::try_parse_from(["tasks", "run", "-d"]).unwrap();
        assert!(matches!(cli.task, Task::Run { debug: true }));

        let cli = Cli::try_parse_from(["tasks", "run", "--debug"]).unwrap();
        assert!(matches!(cli.task, Task::Run { debug: true }));
    }

    #[test]
    fn test_parses_build_without_debug_flag() {
        let cli = Cli::try_parse_from(["tasks", "build"]).unwrap();
        assert!(matches!(cli.task, Task::Build { debug: false }));
    }

    #[test]
    fn test_output_format_is_global() {
        let cli = Cli::try_parse_from(["tasks", "build", "--output-format", "json"]).unwrap();
        assert!(matches!(cli.output_format, OutputFormatArg::Json));
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["tasks", "frobnicate"]).is_err());
    }

    #[test]
    fn test_rejects_debug_flag_on_format() {
        assert!(Cli::try_parse_from(["tasks", "format", "-d"]).is_err());
    }

    #[test]
    fn test_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["tasks"]).is_err());
    }
}
