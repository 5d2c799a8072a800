//! User-facing console output.
//! Rename report lines go to stdout unadorned so they can be piped; status
//! messages get a short prefix, coloured only when the stream is a TTY.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn is_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

fn emit(stream: Stream, line: &str) {
    match stream {
        Stream::Stdout => println!("{line}"),
        Stream::Stderr => eprintln!("{line}"),
    }
}

pub fn print_info(msg: &str) {
    let line = if is_tty(Stream::Stdout) {
        format!("{} {}", "info:".cyan().bold(), msg)
    } else {
        format!("info: {msg}")
    };
    emit(Stream::Stdout, &line);
}

pub fn print_warn(msg: &str) {
    let line = if is_tty(Stream::Stderr) {
        format!("{} {}", "warn:".yellow().bold(), msg)
    } else {
        format!("warn: {msg}")
    };
    emit(Stream::Stderr, &line);
}

pub fn print_error(msg: &str) {
    let line = if is_tty(Stream::Stderr) {
        format!("{} {}", "error:".red().bold(), msg)
    } else {
        format!("error: {msg}")
    };
    emit(Stream::Stderr, &line);
}

/// Print a plain line (no prefix). Used for `rename(old, new)` reports.
pub fn print_user(msg: &str) {
    emit(Stream::Stdout, msg);
}
