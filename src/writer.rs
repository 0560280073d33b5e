use std::io::{self, Write};

/// Seam between command logic and the terminal, so tests can capture
/// everything a command prints.
pub trait OutErr {
    fn write(&mut self, s: &str);
    fn write_err(&mut self, s: &str);
}

pub struct TotpWriter {}

impl TotpWriter {
    pub fn new() -> Self {
        TotpWriter {}
    }
}

impl OutErr for TotpWriter {
    fn write(&mut self, s: &str) {
        if let Err(e) = io::stdout().write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }

    fn write_err(&mut self, s: &str) {
        if let Err(e) = io::stderr().write_all(s.as_bytes()) {
            eprintln!("{}", e);
        }
    }
}
