use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, documentation (possibly empty) was emitted
/// - `Error` (2): Command failed due to internal error (bad start path, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to internal error (bad start path, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
