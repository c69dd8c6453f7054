//! Logging gate for CLI output

/// Verbosity level for command output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all non-error output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// True when messages tagged `required` should be printed at this level
    pub fn allows(self, required: LogLevel) -> bool {
        match self {
            LogLevel::Quiet => false,
            LogLevel::Normal => required == LogLevel::Normal,
            LogLevel::Verbose => true,
        }
    }
}

/// Print `msg` to stdout when the level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.allows(required) {
        println!("{msg}");
    }
}
