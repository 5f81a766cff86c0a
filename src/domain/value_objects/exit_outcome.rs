//! Exit outcome of an external process

/// How a child process terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with a status code
    Exited(i32),
    /// Killed by a signal (Unix only)
    Signaled(i32),
}

impl ExitOutcome {
    pub const SUCCESS: ExitOutcome = ExitOutcome::Exited(0);

    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }

    /// Exit code to hand back to the invoking shell.
    ///
    /// Codes outside `0..=255` collapse to 1; signals follow the shell's
    /// `128 + signal` convention.
    pub fn exit_code(&self) -> u8 {
        match *self {
            ExitOutcome::Exited(code) => u8::try_from(code).unwrap_or(1),
            ExitOutcome::Signaled(signal) => u8::try_from(128 + signal).unwrap_or(1),
        }
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signaled(signal);
            }
        }

        ExitOutcome::Exited(1)
    }
}

impl std::fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exit status {}", code),
            ExitOutcome::Signaled(signal) => write!(f, "signal {}", signal),
        }
    }
}
