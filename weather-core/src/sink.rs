//! Where rendered output goes.
//!
//! Results and errors are kept in two separate regions.

use std::io::{self, Stderr, Stdout, Write};

use crate::render::ListBlock;

pub trait OutputSink {
    /// Append a weather result block to the result region.
    fn append_reading(&mut self, block: ListBlock) -> io::Result<()>;

    /// Append one error entry to the error region.
    fn append_error(&mut self, message: &str) -> io::Result<()>;
}

/// Writes results to one stream and errors to another.
#[derive(Debug)]
pub struct TerminalSink<W, E> {
    results: W,
    errors: E,
}

impl<W: Write, E: Write> TerminalSink<W, E> {
    pub fn new(results: W, errors: E) -> Self {
        Self { results, errors }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.results, self.errors)
    }
}

impl TerminalSink<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> OutputSink for TerminalSink<W, E> {
    fn append_reading(&mut self, block: ListBlock) -> io::Result<()> {
        for item in &block.items {
            writeln!(self.results, "- {item}")?;
        }
        writeln!(self.results)?;
        self.results.flush()
    }

    fn append_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.errors, "- {message}")?;
        writeln!(self.errors)?;
        self.errors.flush()
    }
}

/// Keeps everything in memory. Handy for tests and for embedding.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub readings: Vec<ListBlock>,
    pub errors: Vec<String>,
}

impl OutputSink for MemorySink {
    fn append_reading(&mut self, block: ListBlock) -> io::Result<()> {
        self.readings.push(block);
        Ok(())
    }

    fn append_error(&mut self, message: &str) -> io::Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }
}
