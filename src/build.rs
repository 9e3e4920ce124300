//! Builder: wraps the external build tool.

use crate::error::BuildError;
use crate::project::{BuildMode, Project};
use crate::report::Invocation;
use std::fs;
use std::process::Command;

/// Invoke the build tool for `mode`, capturing its output.
///
/// The tool runs in the invoking directory (where the build configuration
/// lives). Success means it exited 0; the captured invocation is returned so
/// the caller can display its stdout. Failure carries both captured streams
/// verbatim. A single failed attempt is terminal; there are no retries.
pub fn build(mode: BuildMode, project: &Project) -> Result<Invocation, BuildError> {
    if which::which(&project.build_tool).is_err() {
        return Err(BuildError::ToolNotFound {
            tool: project.build_tool.clone(),
        });
    }

    // The build tool expects its output directory to exist.
    fs::create_dir_all(&project.build_dir).map_err(|source| BuildError::BuildDir {
        path: project.build_dir.clone(),
        source,
    })?;

    let mut cmd = Command::new(&project.build_tool);
    cmd.args(mode.tool_args());

    let display = display_command(&project.build_tool, mode);
    let invocation =
        Invocation::capture(&mut cmd, &display).map_err(|source| BuildError::Spawn {
            tool: project.build_tool.clone(),
            source,
        })?;

    if invocation.success() {
        Ok(invocation)
    } else {
        Err(BuildError::Failed {
            code: invocation.exit_code,
            stdout: invocation.stdout,
            stderr: invocation.stderr,
        })
    }
}

/// Command line recorded in invocation results, e.g. `make debug`.
fn display_command(tool: &str, mode: BuildMode) -> String {
    let mut parts = vec![tool];
    parts.extend(mode.tool_args());
    parts.join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command_per_mode() {
        assert_eq!(display_command("make", BuildMode::Release), "make");
        assert_eq!(display_command("make", BuildMode::Debug), "make debug");
    }

    #[test]
    fn test_missing_tool_is_reported_before_spawning() {
        let project = Project {
            build_tool: "definitely-not-a-real-build-tool".to_string(),
            ..Project::default()
        };
        let err = build(BuildMode::Release, &project).unwrap_err();
        assert!(matches!(err, BuildError::ToolNotFound { ref tool } if tool.contains("definitely")));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_build_returns_invocation() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = Project {
            build_tool: "true".to_string(),
            build_dir: temp.path().join("build"),
            ..Project::default()
        };

        let invocation = build(BuildMode::Release, &project).unwrap();
        assert_eq!(invocation.exit_code, Some(0));
        assert_eq!(invocation.command, "true");
        assert!(project.build_dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_build_carries_exit_code() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = Project {
            build_tool: "false".to_string(),
            build_dir: temp.path().join("build"),
            ..Project::default()
        };

        let err = build(BuildMode::Release, &project).unwrap_err();
        assert!(matches!(err, BuildError::Failed { code: Some(1), .. }));
    }
}
