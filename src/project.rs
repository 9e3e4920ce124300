//! Project description, build modes and executable naming rules.

use std::path::PathBuf;

/// Compilation output variant selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Optimized build (the default).
    #[default]
    Release,
    /// Debug build.
    Debug,
}

impl BuildMode {
    /// Select the mode from the CLI debug flag.
    #[must_use]
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Release }
    }

    /// Arguments passed to the build tool for this mode.
    ///
    /// Release builds invoke the tool with no extra argument; debug builds
    /// pass the single `debug` target.
    #[must_use]
    pub fn tool_args(self) -> &'static [&'static str] {
        match self {
            Self::Release => &[],
            Self::Debug => &["debug"],
        }
    }

    /// Filename marker appended to the executable base name.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Release => "",
            Self::Debug => "d",
        }
    }
}

/// Host platform family, as far as executable naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Other,
}

impl HostOs {
    /// The platform this process is running on.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Other }
    }

    /// Executable filename extension for this platform.
    #[must_use]
    pub fn exe_ext(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Other => "",
        }
    }
}

/// Everything the orchestrator needs to know about the wrapped project.
///
/// Passed explicitly to each component rather than read from ambient state,
/// so one invocation can never observe two different layouts.
#[derive(Debug, Clone)]
pub struct Project {
    /// Base name of the produced executable.
    pub name: String,
    /// Build tool, resolved on PATH.
    pub build_tool: String,
    /// Directory the build tool writes the executable into.
    pub build_dir: PathBuf,
    /// Formatter program, resolved on PATH.
    pub format_tool: String,
    /// Formatter subcommand selecting the format action.
    pub format_command: String,
    /// Source directory handed to the formatter.
    pub source_dir: PathBuf,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "hyoga".to_string(),
            build_tool: "make".to_string(),
            build_dir: PathBuf::from("build"),
            format_tool: "odin".to_string(),
            format_command: "fmt".to_string(),
            source_dir: PathBuf::from("src"),
        }
    }
}

impl Project {
    /// Executable filename for the given mode and platform, e.g. `hyogad.exe`
    /// for a debug build on Windows.
    #[must_use]
    pub fn executable_file_name(&self, mode: BuildMode, os: HostOs) -> String {
        format!("{}{}{}", self.name, mode.suffix(), os.exe_ext())
    }

    /// Path of the executable for the given mode and platform, relative to
    /// the invocation root.
    #[must_use]
    pub fn executable_path(&self, mode: BuildMode, os: HostOs) -> PathBuf {
        self.build_dir.join(self.executable_file_name(mode, os))
    }
}
