//! Console error types

/// Errors reported over the wire as framed error responses.
///
/// The first four are detected by the tokenizer or command lookup; the
/// remaining ones are for command handlers reporting domain failures
/// through the same vocabulary. None of these abort the session: each is
/// followed by a state reset and the console accepts the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// Input buffer filled before the terminator was seen
    TooLong,
    /// Command name matched no registered entry
    NotFound,
    /// More arguments supplied than `MAX_ARGUMENTS` allows
    ArgsCount,
    /// Terminator arrived while still inside a quoted argument
    Incomplete,
    /// Handler-reported: value overflows its storage
    Overflow,
    /// Handler-reported: value outside the allowed range
    OutOfRange,
    /// Handler-reported: unrecognized option
    InvalidOption,
}

impl ConsoleError {
    /// Wire payload text of the error response.
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooLong => "Too long",
            Self::NotFound => "Not found",
            Self::ArgsCount => "Args count",
            Self::Incomplete => "Incomplete",
            Self::Overflow => "Overflow",
            Self::OutOfRange => "Out of range",
            Self::InvalidOption => "Invalid option",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
