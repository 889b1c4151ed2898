//! Shared test fixtures
#![allow(dead_code)]

use text_console::ByteStream;

/// In-memory byte stream: tests feed input bytes and inspect the output
/// transcript.
pub struct MockStream {
    input: Vec<u8>,
    read_pos: usize,
    output: Vec<u8>,
}

impl MockStream {
    pub fn new() -> Self {
        Self {
            input: Vec::new(),
            read_pos: 0,
            output: Vec::new(),
        }
    }

    /// Queue bytes for the console to read.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.extend_from_slice(bytes);
    }

    /// Everything the console wrote so far.
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Drain the transcript, returning what was written since last drain.
    pub fn take_output(&mut self) -> String {
        let out = self.output_str();
        self.output.clear();
        out
    }
}

impl ByteStream for MockStream {
    fn available(&self) -> usize {
        self.input.len() - self.read_pos
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.input[self.read_pos];
        self.read_pos += 1;
        byte
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.read_pos).copied()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}
