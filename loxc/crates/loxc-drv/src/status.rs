//! Process exit statuses.

use std::process::ExitCode;

/// Outcome of a driver run, as reported to the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Everything scanned cleanly.
    Success,
    /// At least one lexical error was reported.
    LexicalError,
    /// The run failed for a reason unrelated to the input text.
    UnknownError,
}

impl Status {
    /// Returns the numeric exit code.
    pub const fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::LexicalError => 65,
            Status::UnknownError => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::LexicalError.code(), 65);
        assert_eq!(Status::UnknownError.code(), 1);
    }
}
