//! Byte source/sink abstraction
//!
//! The console never owns its transport; every call that touches the wire
//! takes `&mut dyn ByteStream`, so the same console state machine runs over
//! a UART, a USB CDC endpoint or an in-memory fixture.

/// Non-blocking byte source/sink.
///
/// All operations must return immediately. `read_byte` may only be called
/// while `available()` reports at least one byte.
pub trait ByteStream {
    /// Number of bytes ready to be read without blocking.
    fn available(&self) -> usize;

    /// Consume and return the next byte.
    ///
    /// Callers must check `available()` first; behavior with an empty
    /// source is implementation-defined.
    fn read_byte(&mut self) -> u8;

    /// Look at the next byte without consuming it, if any.
    fn peek_byte(&self) -> Option<u8>;

    /// Write raw bytes to the sink.
    fn write(&mut self, bytes: &[u8]);
}
