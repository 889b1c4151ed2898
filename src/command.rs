//! Command table and lookup

use crate::error::ConsoleError;
use crate::response::{ResponseKind, ResponseWriter};
use crate::session::Args;

/// Handler invoked when a completed line resolves to its entry.
///
/// A handler reads its arguments through [`Args`] and produces exactly one
/// framed response through the writer before returning.
pub type CommandHandler = fn(&Args<'_>, &mut ResponseWriter<'_>);

/// One registered command.
///
/// Entries are immutable and owned by the caller for the process lifetime.
/// A zero-length name is reserved for the built-in no-op entry and must not
/// be registered; name uniqueness is a caller contract, not enforced.
pub struct CommandEntry {
    pub name: &'static str,
    pub handler: CommandHandler,
}

fn cmd_not_supported(_args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.send_response(ResponseKind::Error, ConsoleError::NotFound.message());
}

fn cmd_empty(_args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.send_response(ResponseKind::Success, "");
}

/// Dispatched when the resolved name matches no registered entry.
pub static NOT_SUPPORTED_ENTRY: CommandEntry = CommandEntry {
    name: "",
    handler: cmd_not_supported,
};

/// Dispatched for an empty command name (a lone terminator).
pub static EMPTY_ENTRY: CommandEntry = CommandEntry {
    name: "",
    handler: cmd_empty,
};

/// Resolve a command name against the table.
///
/// Exact byte-for-byte match, first match wins, scan order is registration
/// order. Lookup never fails structurally: an empty name maps to the no-op
/// success entry and an unknown name to an entry whose handler reports
/// `Not found`.
pub fn find_command<'a>(commands: &'a [CommandEntry], name: &str) -> &'a CommandEntry {
    if name.is_empty() {
        return &EMPTY_ENTRY;
    }

    commands
        .iter()
        .find(|c| c.name == name)
        .unwrap_or(&NOT_SUPPORTED_ENTRY)
}
