//! Runner: build, locate and launch the produced executable.

use crate::build;
use crate::error::RunError;
use crate::project::{BuildMode, HostOs, Project};
use crate::report::{Invocation, OutputMode};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Outcome of a completed `run` task.
#[derive(Debug)]
pub struct RunOutcome {
    /// The captured build step.
    pub build: Invocation,

    /// The captured target invocation (structured mode only; in stream mode
    /// the target's output goes straight to the terminal).
    pub target: Option<Invocation>,

    /// Exit code of the launched executable, unmodified.
    pub exit_code: i32,
}

/// Build `mode`, then launch the produced executable and wait for it.
///
/// The executable is never launched unless the build step exited 0. Its
/// working directory is the build output directory, so the program can rely
/// on paths relative to its own resources. In [`OutputMode::Stream`] the
/// target inherits the terminal's stdio and its output is interleaved live.
pub fn run(
    mode: BuildMode,
    output: OutputMode,
    project: &Project,
) -> Result<RunOutcome, RunError> {
    let build = build::build(mode, project)?;

    if output == OutputMode::Stream {
        if !build.stdout.is_empty() {
            print!("{}", build.stdout);
        }
        println!("Running...");
    }

    let path = project.executable_path(mode, HostOs::current());
    if !path.exists() {
        return Err(RunError::ExecutableNotFound { path });
    }

    // A relative program path combined with `current_dir` is resolved
    // differently across platforms, so launch through an absolute path.
    let program = std::path::absolute(&path).map_err(|source| RunError::Spawn {
        path: path.clone(),
        source,
    })?;

    match output {
        OutputMode::Stream => {
            let status = launch_streamed(&program, &project.build_dir).map_err(|source| {
                RunError::Spawn {
                    path: path.clone(),
                    source,
                }
            })?;
            let exit_code = classify_exit(status)?;
            Ok(RunOutcome {
                build,
                target: None,
                exit_code,
            })
        }
        OutputMode::Structured => {
            let mut cmd = Command::new(&program);
            cmd.current_dir(&project.build_dir);

            let display = path.display().to_string();
            let (target, status) = Invocation::capture_with_status(&mut cmd, &display)
                .map_err(|source| RunError::Spawn {
                    path: path.clone(),
                    source,
                })?;
            let exit_code = classify_exit(status)?;
            Ok(RunOutcome {
                build,
                target: Some(target),
                exit_code,
            })
        }
    }
}

fn launch_streamed(program: &Path, working_dir: &Path) -> std::io::Result<ExitStatus> {
    Command::new(program)
        .current_dir(working_dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
}

/// Map an exit status to the child's own code, or a [`RunError::Terminated`]
/// when the child was killed by a signal instead of exiting.
fn classify_exit(status: ExitStatus) -> Result<i32, RunError> {
    if let Some(code) = status.code() {
        return Ok(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        Err(RunError::Terminated {
            signal: status.signal(),
        })
    }
    #[cfg(not(unix))]
    {
        Err(RunError::Terminated { signal: None })
    }
}
