use crate::output_utils;
use std::process::ExitCode;

/// What a command prints and the exit code the binary returns for it.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed result listing each of `failures` beneath `summary`.
    pub fn failures<I>(summary: std::fmt::Arguments<'_>, failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        let mut message = format!("{} {summary}", output_utils::RED_X);
        for failure in failures {
            message.push_str(&format!("\n  * {failure}"));
        }
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(message),
            stdout: None,
        }
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
