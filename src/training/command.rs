//! External program invocation with a uniform result type

use crate::io::configuration::STDERR_TAIL_LINES;
use crate::io::error::{Result, TrainerError, file_system};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// A program name and its arguments, independent of how it is executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
}

impl Invocation {
    /// Start an invocation of `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append a `--name=value` style flag
    #[must_use]
    pub fn flag(mut self, name: &str, value: impl AsRef<OsStr>) -> Self {
        let mut flag = OsString::from(format!("--{name}="));
        flag.push(value);
        self.args.push(flag);
        self
    }

    /// Program name as given to the runner
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments in order
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Shell-like rendering for logs and error messages
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Exit status and captured output of a finished program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the program reported success
    pub success: bool,
    /// Exit code, absent when terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output, empty when streamed
    pub stdout: String,
    /// Captured standard error, empty when streamed
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with no captured output
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Turn an unsuccessful output into [`TrainerError::CommandFailed`]
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::CommandFailed`] when `success` is false
    pub fn check(self, program: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(TrainerError::CommandFailed {
                program: program.to_string(),
                code: self.code,
                stderr: tail_lines(&self.stderr, STDERR_TAIL_LINES),
            })
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Executes invocations synchronously inside a working directory
pub trait CommandRunner {
    /// Run `invocation` with `cwd` as working directory and wait for it
    ///
    /// An unsuccessful exit is reported through [`CommandOutput::success`],
    /// not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput> {
        (**self).run(invocation, cwd)
    }
}

/// Runs invocations as child processes of this one
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    tools_dir: Option<PathBuf>,
    verbose: bool,
}

impl SystemRunner {
    /// Create a runner resolving programs in `tools_dir`, or on `PATH` if `None`
    ///
    /// A relative `tools_dir` is anchored to the current directory, since
    /// programs are launched from inside the workspace. With `verbose` set,
    /// child output goes straight to the terminal instead of being captured.
    pub fn new(tools_dir: Option<PathBuf>, verbose: bool) -> Self {
        let tools_dir = tools_dir.map(|dir| std::path::absolute(&dir).unwrap_or(dir));
        Self { tools_dir, verbose }
    }

    /// Path or bare name used to launch `program`
    pub fn resolve(&self, program: &str) -> PathBuf {
        self.tools_dir.as_ref().map_or_else(
            || PathBuf::from(program),
            |dir| dir.join(format!("{program}{}", std::env::consts::EXE_SUFFIX)),
        )
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation, cwd: &Path) -> Result<CommandOutput> {
        let executable = self.resolve(invocation.program());
        let mut command = Command::new(&executable);
        command.args(invocation.args()).current_dir(cwd).stdin(Stdio::null());

        let launched = if self.verbose {
            command.status().map(|status| CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            })
        } else {
            command.output().map(CommandOutput::from)
        };

        launched.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TrainerError::ToolNotFound {
                    program: executable.display().to_string(),
                    source,
                }
            } else {
                file_system("launch", executable, source)
            }
        })
    }
}

/// Keep the last `count` lines of `text`
pub fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(count);
    lines.get(start..).unwrap_or_default().join("\n")
}
