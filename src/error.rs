//! Process exit codes.

/// Exit codes for the picdupe application.
///
/// - 0: Success (scan completed, whether or not similar groups were found)
/// - 1: General error (traversal, decode, or fingerprint failure)
///
/// Argument errors exit through clap with its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the scan completed.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
    }
}
