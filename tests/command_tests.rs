//! Command table, lookup and dispatch bookkeeping tests.

mod common;

use common::MockStream;
use pretty_assertions::assert_eq;
use text_console::{
    find_command, Args, CommandEntry, Console, ResponseKind, ResponseWriter, EMPTY_ENTRY,
    NOT_SUPPORTED_ENTRY,
};

fn cmd_ok(_args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.send_response(ResponseKind::Success, "ok");
}

fn cmd_warn(_args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.send_response(ResponseKind::Warning, "warn");
}

fn cmd_silent(_args: &Args<'_>, _out: &mut ResponseWriter<'_>) {}

fn cmd_last(args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.begin_response(ResponseKind::Success);
    match args.previous_command() {
        Some(prev) if !prev.name.is_empty() => out.send_text(prev.name),
        Some(_) => out.send_text("(builtin)"),
        None => out.send_text("(none)"),
    }
    out.end_response();
}

fn cmd_probe(args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.begin_response(ResponseKind::Success);
    match args.arg(1) {
        Some(arg) => out.send_text(arg),
        None => out.send_text("absent"),
    }
    out.end_response();
}

fn cmd_raw(args: &Args<'_>, out: &mut ResponseWriter<'_>) {
    out.begin_response(ResponseKind::Success);
    out.send_bytes(args.arg_bytes(0).unwrap_or(b""));
    out.end_response();
}

static COMMANDS: &[CommandEntry] = &[
    CommandEntry { name: "ok", handler: cmd_ok },
    CommandEntry { name: "warn", handler: cmd_warn },
    CommandEntry { name: "silent", handler: cmd_silent },
    CommandEntry { name: "last", handler: cmd_last },
    CommandEntry { name: "probe", handler: cmd_probe },
    CommandEntry { name: "raw", handler: cmd_raw },
    // Duplicate name: registration order decides.
    CommandEntry { name: "ok", handler: cmd_warn },
];

#[test]
fn test_find_exact_match() {
    let entry = find_command(COMMANDS, "warn");
    assert!(std::ptr::eq(entry, &COMMANDS[1]));
}

#[test]
fn test_find_first_match_wins() {
    let entry = find_command(COMMANDS, "ok");
    assert!(std::ptr::eq(entry, &COMMANDS[0]));
}

#[test]
fn test_find_is_exact_not_prefix() {
    let entry = find_command(COMMANDS, "o");
    assert!(std::ptr::eq(entry, &NOT_SUPPORTED_ENTRY));
    let entry = find_command(COMMANDS, "okay");
    assert!(std::ptr::eq(entry, &NOT_SUPPORTED_ENTRY));
}

#[test]
fn test_find_empty_name_maps_to_noop_entry() {
    let entry = find_command(COMMANDS, "");
    assert!(std::ptr::eq(entry, &EMPTY_ENTRY));
}

#[test]
fn test_find_unknown_maps_to_not_supported_entry() {
    let entry = find_command(COMMANDS, "missing");
    assert!(std::ptr::eq(entry, &NOT_SUPPORTED_ENTRY));
}

#[test]
fn test_dispatch_records_previous_command_and_result() {
    let mut io = MockStream::new();
    let mut buffer = [0u8; 64];
    let mut console = Console::new(&mut buffer, COMMANDS);

    assert!(console.previous_command().is_none());
    assert!(console.previous_result().is_none());

    io.feed(b"ok\r");
    console.poll(&mut io);
    assert_eq!(console.previous_command().unwrap().name, "ok");
    assert_eq!(console.previous_result(), Some(ResponseKind::Success));

    io.feed(b"warn\r");
    console.poll(&mut io);
    assert_eq!(console.previous_command().unwrap().name, "warn");
    assert_eq!(console.previous_result(), Some(ResponseKind::Warning));
}

#[test]
fn test_silent_handler_keeps_previous_result() {
    let mut io = MockStream::new();
    let mut buffer = [0u8; 64];
    let mut console = Console::new(&mut buffer, COMMANDS);

    io.feed(b"warn\r");
    console.poll(&mut io);
    assert_eq!(console.previous_result(), Some(ResponseKind::Warning));

    // A handler that never sets a class leaves the record untouched.
    io.feed(b"silent\r");
    console.poll(&mut io);
    assert_eq!(console.previous_command().unwrap().name, "silent");
    assert_eq!(console.previous_result(), Some(ResponseKind::Warning));
}

#[test]
fn test_handlers_see_previous_command() {
    let mut io = MockStream::new();
    let mut buffer = [0u8; 64];
    let mut console = Console::new(&mut buffer, COMMANDS);

    io.feed(b"last\r");
    console.poll(&mut io);
    assert_eq!(io.take_output(), ">(none)\r\n[:)]\r\n");

    io.feed(b"ok\rlast\r");
    console.poll(&mut io);
    assert_eq!(io.take_output(), ">ok\r\n[:)]\r\nok\r\n[:)]\r\n");
}

#[test]
fn test_argument_accessor_past_count_is_absent() {
    let mut io = MockStream::new();
    let mut buffer = [0u8; 64];
    let mut console = Console::new(&mut buffer, COMMANDS);

    io.feed(b"probe x\r");
    console.poll(&mut io);
    assert_eq!(io.take_output(), ">absent\r\n[:)]\r\n");

    io.feed(b"probe x y\r");
    console.poll(&mut io);
    assert_eq!(io.take_output(), ">y\r\n[:)]\r\n");
}

#[test]
fn test_argument_raw_bytes() {
    let mut io = MockStream::new();
    let mut buffer = [0u8; 64];
    let mut console = Console::new(&mut buffer, COMMANDS);

    io.feed(b"raw payload\r");
    console.poll(&mut io);
    assert_eq!(io.take_output(), ">payload\r\n[:)]\r\n");
}

#[test]
fn test_console_find_wrapper() {
    let mut buffer = [0u8; 64];
    let console = Console::new(&mut buffer, COMMANDS);
    assert!(std::ptr::eq(console.find("warn"), &COMMANDS[1]));
    assert!(std::ptr::eq(console.find(""), &EMPTY_ENTRY));
}
