use colored::Colorize;
use std::io::{self, Write};

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Write a rendered document to stdout exactly as produced
pub fn print_document(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

/// Kind of status line
pub enum Status {
    Done,
    Step,
    Warn,
}

/// Status line on stderr, so stdout stays reserved for documents
pub fn status(kind: Status, message: &str) {
    let marker = match kind {
        Status::Done => "✓".green().bold(),
        Status::Step => "→".cyan(),
        Status::Warn => "!".yellow(),
    };
    eprintln!("{} {}", marker, message);
}
