//! Response framing
//!
//! Handler output is wrapped with an end-of-line marker and a status tag
//! derived from the last response class set. Events use a distinct prefixed
//! frame and never carry a tag.

use core::fmt;

use crate::stream::ByteStream;

/// End-of-line marker used by all framing.
pub const EOLN: &str = "\r\n";

/// Prefix for asynchronous event frames.
pub const EVENT_HEADER: &str = "<";

/// Response classes recognized by the framing protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    Warning,
    Error,
}

impl ResponseKind {
    /// Status tag emitted on the line after the payload.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success => "[:)]",
            Self::Warning => "[:O]",
            Self::Error => "[:(]",
        }
    }
}

/// Writes framed responses and events to the underlying stream.
///
/// The status tag appended by [`end_response`](Self::end_response) reflects
/// the last class set through [`begin_response`](Self::begin_response),
/// [`send_response`](Self::send_response) or
/// [`end_response_as`](Self::end_response_as); partial payload writes never
/// change it. A writer that was never given a class closes its frame with
/// the end-of-line marker alone.
pub struct ResponseWriter<'a> {
    stream: &'a mut dyn ByteStream,
    kind: Option<ResponseKind>,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(stream: &'a mut dyn ByteStream) -> Self {
        Self { stream, kind: None }
    }

    /// Send a complete framed response in one call.
    ///
    /// Equivalent to `begin_response(kind)`, one `send_text(payload)` and
    /// `end_response()`.
    pub fn send_response(&mut self, kind: ResponseKind, payload: &str) {
        self.begin_response(kind);
        self.send_text(payload);
        self.end_response();
    }

    /// Start a multi-part response of the given class.
    pub fn begin_response(&mut self, kind: ResponseKind) {
        self.kind = Some(kind);
    }

    /// Write a text chunk of the payload.
    pub fn send_text(&mut self, text: &str) {
        self.stream.write(text.as_bytes());
    }

    /// Write a raw byte span of the payload.
    pub fn send_bytes(&mut self, bytes: &[u8]) {
        self.stream.write(bytes);
    }

    /// Write a numeric value in its natural textual form.
    pub fn send_number<V: fmt::Display>(&mut self, value: V) {
        use core::fmt::Write;
        let _ = write!(self, "{}", value);
    }

    /// Close the response: end-of-line, then the status tag of the last
    /// class set (if any), then another end-of-line.
    pub fn end_response(&mut self) {
        self.stream.write(EOLN.as_bytes());
        if let Some(kind) = self.kind {
            self.stream.write(kind.tag().as_bytes());
            self.stream.write(EOLN.as_bytes());
        }
    }

    /// Close the response, overriding whatever class was set earlier.
    pub fn end_response_as(&mut self, kind: ResponseKind) {
        self.kind = Some(kind);
        self.end_response();
    }

    /// Open an asynchronous event frame. Events are prefixed, not tagged.
    pub fn begin_event(&mut self) {
        self.stream.write(EVENT_HEADER.as_bytes());
    }

    /// Close an event frame.
    pub fn end_event(&mut self) {
        self.stream.write(EOLN.as_bytes());
    }

    /// Last response class set on this writer, if any.
    pub fn last_kind(&self) -> Option<ResponseKind> {
        self.kind
    }
}

impl fmt::Write for ResponseWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.stream.write(s.as_bytes());
        Ok(())
    }
}
