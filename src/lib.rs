//! # text-console
//!
//! Interactive line-command console over a raw byte stream.
//!
//! Built for resource-constrained targets: fixed caller-owned buffers, zero
//! heap allocation, single caller thread, cooperative (non-blocking)
//! polling.
//!
//! ## Architecture
//!
//! - Bytes arrive through a [`ByteStream`] and are tokenized in place by
//!   [`Console::poll`], one byte at a time, with quoting and overflow
//!   handling
//! - On the `\r` terminator the line's command name is resolved against an
//!   ordered [`CommandEntry`] table and its handler runs synchronously
//! - Handlers read their arguments through [`Args`] and reply through the
//!   [`ResponseWriter`] framing (`\r\n` end-of-line, `[:)]`/`[:O]`/`[:(]`
//!   status tags)
//!
//! ```no_run
//! use text_console::{Args, CommandEntry, Console, ResponseKind, ResponseWriter};
//!
//! fn cmd_ping(_args: &Args<'_>, out: &mut ResponseWriter<'_>) {
//!     out.send_response(ResponseKind::Success, "pong");
//! }
//!
//! static COMMANDS: &[CommandEntry] = &[CommandEntry { name: "ping", handler: cmd_ping }];
//!
//! fn run(io: &mut dyn text_console::ByteStream) {
//!     let mut buffer = [0u8; 64];
//!     let mut console = Console::new(&mut buffer, COMMANDS);
//!     console.begin(Some("ready"), io);
//!     loop {
//!         console.poll(io);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod console;
pub mod error;
pub mod response;
pub mod session;
pub mod stream;

pub use command::{find_command, CommandEntry, CommandHandler, EMPTY_ENTRY, NOT_SUPPORTED_ENTRY};
pub use console::{Console, PROMPT, QUOTE, SEPARATOR, TERMINATOR};
pub use error::ConsoleError;
pub use response::{ResponseKind, ResponseWriter, EOLN, EVENT_HEADER};
pub use session::{Args, Session, MAX_ARGUMENTS};
pub use stream::ByteStream;
