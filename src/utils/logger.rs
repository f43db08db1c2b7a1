use std::{
    fmt::Arguments,
    io::{self, Write},
};

/// Sink for everything the prompt shows to the user: stage output through
/// `print`, rejected input through `error`.
pub trait Logger {
    fn print(&mut self, value: Arguments);

    fn error(&mut self, value: Arguments) {
        eprintln!("{}", value)
    }

    /// Shown before each line is read in interactive mode.
    fn prompt(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Results to stdout, errors to stderr.
pub struct StdoutLogger;
impl Logger for StdoutLogger {
    fn print(&mut self, value: Arguments) {
        println!("{}", value)
    }

    fn prompt(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "> ")?;
        stdout.flush()
    }
}
