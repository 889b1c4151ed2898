//! Per-line session state
//!
//! One `Session` per console instance. It owns no storage of its own: the
//! input arena is a caller-supplied byte slice and every token position is
//! an index into it.

use crate::command::CommandEntry;
use crate::response::ResponseKind;

/// Maximum number of arguments per command line.
pub const MAX_ARGUMENTS: usize = 10;

/// State of the command line currently being assembled, plus the record of
/// the last completed one.
///
/// Argument text is written into the arena with a NUL placed at each
/// closing separator, so `arg_offsets[i]` marks the start of a
/// NUL-terminated token. The command name is resolved and discarded when
/// its closing separator arrives; it never occupies an argument slot.
pub struct Session<'a> {
    pub(crate) buffer: &'a mut [u8],
    pub(crate) write_pos: usize,
    pub(crate) arg_offsets: [usize; MAX_ARGUMENTS],
    pub(crate) arg_count: usize,
    pub(crate) quoting: bool,
    /// Last byte processed; `None` until the first byte of a line arrives.
    pub(crate) prev_char: Option<u8>,
    /// A prompt is owed before the next byte of input.
    pub(crate) prompt_pending: bool,
    pub(crate) current: Option<&'a CommandEntry>,
    pub(crate) previous: Option<&'a CommandEntry>,
    pub(crate) previous_result: Option<ResponseKind>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            write_pos: 0,
            arg_offsets: [0; MAX_ARGUMENTS],
            arg_count: 0,
            quoting: false,
            prev_char: None,
            prompt_pending: true,
            current: None,
            previous: None,
            previous_result: None,
        }
    }

    /// Clear per-line state.
    ///
    /// Called once at startup and after every completed, overflowed or
    /// malformed line. The previous-command record survives; the arena is
    /// never reallocated, only `write_pos` is rewound.
    pub fn reset(&mut self) {
        self.write_pos = 0;
        self.arg_count = 0;
        self.quoting = false;
        self.prev_char = None;
        self.prompt_pending = true;
        self.current = None;
    }

    /// Capacity of the input arena.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Next free offset in the arena.
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Arguments closed so far on the line being assembled.
    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Whether the tokenizer is inside a quoted token.
    pub fn is_quoting(&self) -> bool {
        self.quoting
    }
}

/// Read-only view of a completed command line, handed to handlers.
pub struct Args<'s> {
    buffer: &'s [u8],
    offsets: &'s [usize; MAX_ARGUMENTS],
    count: usize,
    previous: Option<&'s CommandEntry>,
    previous_result: Option<ResponseKind>,
}

impl<'s> Args<'s> {
    pub(crate) fn new(session: &'s Session<'_>) -> Self {
        Self {
            buffer: &session.buffer[..],
            offsets: &session.arg_offsets,
            count: session.arg_count,
            previous: session.previous,
            previous_result: session.previous_result,
        }
    }

    /// Number of arguments supplied after the command name.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Argument text by index, `None` once past the last argument or if
    /// the token is not valid UTF-8 (see [`arg_bytes`](Self::arg_bytes)).
    pub fn arg(&self, index: usize) -> Option<&'s str> {
        self.arg_bytes(index)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    /// Raw bytes of an argument, `None` once past the last argument.
    pub fn arg_bytes(&self, index: usize) -> Option<&'s [u8]> {
        if index >= self.count || index >= MAX_ARGUMENTS {
            return None;
        }
        let start = self.offsets[index];
        let rest = &self.buffer[start..];
        let len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        Some(&rest[..len])
    }

    /// Entry dispatched for the previously completed line.
    pub fn previous_command(&self) -> Option<&'s CommandEntry> {
        self.previous
    }

    /// Result class reported by the previously completed line.
    pub fn previous_result(&self) -> Option<ResponseKind> {
        self.previous_result
    }
}
