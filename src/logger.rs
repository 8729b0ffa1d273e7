use std::fmt::Display;

/// Tag-prefixed logger. `log` lines only appear in development mode,
/// warnings and errors always print.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Logger { verbose }
    }

    pub fn log(&self, tag: &str, msg: impl Display) {
        if self.verbose {
            println!("{}", tagged(tag, msg));
        }
    }

    pub fn warn(&self, tag: &str, msg: impl Display) {
        eprintln!("{}", tagged(tag, msg));
    }

    pub fn error(&self, tag: &str, msg: impl Display) {
        eprintln!("{}", tagged(tag, msg));
    }
}

fn tagged(tag: &str, msg: impl Display) -> String {
    format!("[{}] {}", tag, msg)
}
