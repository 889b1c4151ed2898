//! Console state machine
//!
//! Byte-at-a-time tokenizer over a partially-available stream, plus the
//! dispatcher that runs the resolved handler when the terminator arrives.
//! Cooperative polling: one `poll` call drains whatever the stream has
//! buffered and returns, it never waits for more input.

use crate::command::{find_command, CommandEntry, EMPTY_ENTRY, NOT_SUPPORTED_ENTRY};
use crate::error::ConsoleError;
use crate::response::{ResponseKind, ResponseWriter, EOLN};
use crate::session::{Args, Session, MAX_ARGUMENTS};
use crate::stream::ByteStream;

/// Command terminator byte.
pub const TERMINATOR: u8 = b'\r';

/// Argument/token separator byte.
pub const SEPARATOR: u8 = b' ';

/// Quote byte; toggles quoted-token mode and is not itself stored.
pub const QUOTE: u8 = b'"';

/// Prompt emitted once per completed line, before new input is accepted.
pub const PROMPT: &str = ">";

/// Line-command console over a caller-owned buffer and command table.
///
/// Single-threaded: the session state is mutated only by the polling call,
/// and dispatch runs synchronously inside the call that saw the terminator.
/// Embedding multiple sessions means one `Console` per session, each with
/// its own buffer.
pub struct Console<'a> {
    commands: &'a [CommandEntry],
    session: Session<'a>,
}

impl<'a> Console<'a> {
    /// Create a console over a caller-owned input buffer and an ordered
    /// command table. The buffer length is the line capacity.
    pub fn new(buffer: &'a mut [u8], commands: &'a [CommandEntry]) -> Self {
        Self {
            commands,
            session: Session::new(buffer),
        }
    }

    /// Reset line state and print the optional welcome payload followed by
    /// one end-of-line marker.
    pub fn begin(&mut self, welcome: Option<&str>, out: &mut dyn ByteStream) {
        self.session.reset();
        if let Some(text) = welcome {
            out.write(text.as_bytes());
        }
        out.write(EOLN.as_bytes());
    }

    /// Drain every byte currently available from the stream.
    ///
    /// Returns whether any byte was processed. Never blocks waiting for
    /// more input; a command line spread over several deliveries is picked
    /// up where the previous call left off. When a terminator is seen the
    /// resolved handler runs synchronously inside this call.
    pub fn poll(&mut self, io: &mut dyn ByteStream) -> bool {
        if self.session.prompt_pending {
            io.write(PROMPT.as_bytes());
            self.session.prompt_pending = false;
        }

        let mut handled = false;
        while io.available() > 0 {
            handled = true;
            let byte = io.read_byte();
            self.consume(byte, &mut *io);
        }

        handled
    }

    fn consume(&mut self, byte: u8, io: &mut dyn ByteStream) {
        if self.session.write_pos >= self.session.capacity() {
            // Line overflowed: discard everything until the terminator.
            if byte == TERMINATOR {
                self.report_error(ConsoleError::TooLong, io);
                self.session.reset();
            }
            return;
        }

        if !self.session.quoting && (byte == SEPARATOR || byte == TERMINATOR) {
            self.close_token();
        } else if byte == QUOTE {
            self.session.quoting = !self.session.quoting;
        } else {
            let pos = self.session.write_pos;
            self.session.buffer[pos] = byte;
            self.session.write_pos = pos + 1;
        }

        self.session.prev_char = Some(byte);
        self.session.prompt_pending = false;

        if byte == TERMINATOR {
            self.finish_line(io);
        }
    }

    /// A separator (or the terminator) closed the token being accumulated.
    fn close_token(&mut self) {
        let s = &mut self.session;
        s.buffer[s.write_pos] = 0;

        if s.current.is_none() {
            // The bytes so far are the command name. Resolve it, then
            // rewind: the name text is not retained in the arena. A name
            // that is not valid UTF-8 can match no registered entry.
            let entry = match core::str::from_utf8(&s.buffer[..s.write_pos]) {
                Ok(name) => find_command(self.commands, name),
                Err(_) => &NOT_SUPPORTED_ENTRY,
            };
            s.current = Some(entry);
            s.write_pos = 0;
            s.buffer[0] = 0;
            s.arg_offsets[0] = 0;
            s.arg_count = 0;
        } else if s.prev_char != Some(SEPARATOR) {
            // A run of separators closes at most one argument.
            s.write_pos += 1;
            s.arg_count += 1;
            if s.arg_count < MAX_ARGUMENTS {
                s.arg_offsets[s.arg_count] = s.write_pos;
            }
        }
    }

    fn finish_line(&mut self, io: &mut dyn ByteStream) {
        if self.session.quoting {
            self.report_error(ConsoleError::Incomplete, io);
            self.session.reset();
        } else if self.session.arg_count < MAX_ARGUMENTS {
            self.dispatch(&mut *io);
            self.session.reset();
            // Absorb the LF of a CR/LF pair so it does not open an
            // empty command line.
            while io.peek_byte() == Some(b'\n') {
                io.read_byte();
            }
        } else {
            self.report_error(ConsoleError::ArgsCount, io);
            self.session.reset();
        }
    }

    /// Invoke the resolved handler exactly once and record the outcome.
    fn dispatch(&mut self, io: &mut dyn ByteStream) {
        let entry = self.session.current.unwrap_or(&EMPTY_ENTRY);
        let handler = entry.handler;

        let kind = {
            let args = Args::new(&self.session);
            let mut out = ResponseWriter::new(io);
            handler(&args, &mut out);
            out.last_kind()
        };

        if let Some(kind) = kind {
            self.session.previous_result = Some(kind);
        }
        self.session.previous = Some(entry);
    }

    fn report_error(&mut self, err: ConsoleError, io: &mut dyn ByteStream) {
        let mut out = ResponseWriter::new(io);
        out.send_response(ResponseKind::Error, err.message());
        self.session.previous_result = Some(ResponseKind::Error);
    }

    /// Resolve a name against this console's command table.
    pub fn find(&self, name: &str) -> &'a CommandEntry {
        find_command(self.commands, name)
    }

    /// Entry dispatched for the last completed line.
    pub fn previous_command(&self) -> Option<&'a CommandEntry> {
        self.session.previous
    }

    /// Result class reported by the last response sent.
    pub fn previous_result(&self) -> Option<ResponseKind> {
        self.session.previous_result
    }

    /// State of the line being assembled.
    pub fn session(&self) -> &Session<'a> {
        &self.session
    }

    /// Abandon the line being assembled.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
