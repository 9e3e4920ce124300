//! Formatter: wraps the external source formatter.

use crate::error::FormatError;
use crate::project::Project;
use crate::report::Invocation;
use std::process::Command;

/// Run the source formatter over the project's source directory.
///
/// Stateless and independent of the build pipeline; reformatting
/// already-formatted source succeeds with nothing to do.
pub fn format_sources(project: &Project) -> Result<Invocation, FormatError> {
    if which::which(&project.format_tool).is_err() {
        return Err(FormatError::ToolNotFound {
            tool: project.format_tool.clone(),
        });
    }

    let mut cmd = Command::new(&project.format_tool);
    cmd.arg(&project.format_command).arg(&project.source_dir);

    let display = format!(
        "{} {} {}",
        project.format_tool,
        project.format_command,
        project.source_dir.display()
    );
    let invocation =
        Invocation::capture(&mut cmd, &display).map_err(|source| FormatError::Spawn {
            tool: project.format_tool.clone(),
            source,
        })?;

    if invocation.success() {
        Ok(invocation)
    } else {
        Err(FormatError::Failed {
            code: invocation.exit_code,
            stdout: invocation.stdout,
            stderr: invocation.stderr,
        })
    }
}
