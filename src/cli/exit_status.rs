use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): no error-severity issue was found
/// - `Failure` (1): missing keys, unloadable or unwritable locale files, or a fatal error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
