//! Strict quote checking
//!
//! The `csv` reader accepts malformed quoting and silently repairs it. Exports
//! are passed through [`StrictQuotes`] first, which fails the read on a bare
//! quote inside an unquoted field, on text after a closing quote, and on a
//! quoted field left open at end of input.

use std::io::{self, Read};

use thiserror::Error;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A quoting violation, carried inside the `io::Error` the reader returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct QuoteError {
    pub line: u64,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the closing quote
    QuoteInQuoted,
    /// Closing quote followed by '\r', only '\n' may follow
    CarriageReturn,
}

/// Read adapter that checks quote structure as bytes pass through
#[derive(Debug)]
pub struct StrictQuotes<R> {
    inner: R,
    delimiter: u8,
    state: State,
    line: u64,
    /// Line the currently open quoted field started on
    opened_on: u64,
    bom_seen: usize,
}

impl<R: Read> StrictQuotes<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delimiter: b',',
            state: State::FieldStart,
            line: 1,
            opened_on: 1,
            bom_seen: 0,
        }
    }

    fn fail(&self, line: u64, reason: &'static str) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, QuoteError { line, reason })
    }

    fn step(&mut self, b: u8) -> io::Result<()> {
        if self.bom_seen < UTF8_BOM.len() {
            if b == UTF8_BOM[self.bom_seen] {
                self.bom_seen += 1;
                return Ok(());
            }
            self.bom_seen = UTF8_BOM.len();
        }

        self.state = match (self.state, b) {
            (State::FieldStart, b'"') => {
                self.opened_on = self.line;
                State::Quoted
            }
            (State::FieldStart | State::Unquoted, b'\n') => {
                self.line += 1;
                State::FieldStart
            }
            (State::FieldStart | State::Unquoted, b) if b == self.delimiter => State::FieldStart,
            (State::FieldStart, b'\r') => State::FieldStart,
            (State::FieldStart, _) => State::Unquoted,
            (State::Unquoted, b'"') => {
                return Err(self.fail(self.line, "bare \" in non-quoted field"))
            }
            (State::Unquoted, _) => State::Unquoted,
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, b'\n') => {
                self.line += 1;
                State::Quoted
            }
            (State::Quoted, _) => State::Quoted,
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::QuoteInQuoted, b'\n') | (State::CarriageReturn, b'\n') => {
                self.line += 1;
                State::FieldStart
            }
            (State::QuoteInQuoted, b) if b == self.delimiter => State::FieldStart,
            (State::QuoteInQuoted, b'\r') => State::CarriageReturn,
            (State::QuoteInQuoted, _) | (State::CarriageReturn, _) => {
                return Err(self.fail(self.line, "extraneous or missing \" in quoted field"))
            }
        };
        Ok(())
    }

    fn finish(&self) -> io::Result<()> {
        if self.state == State::Quoted {
            return Err(self.fail(self.opened_on, "quoted field is never closed"));
        }
        Ok(())
    }
}

impl<R: Read> Read for StrictQuotes<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            self.finish()?;
        }
        for &b in &buf[..n] {
            self.step(b)?;
        }
        Ok(n)
    }
}

/// The quoting violation behind a failed read, if that is what it was
pub fn quote_error(err: &io::Error) -> Option<QuoteError> {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<QuoteError>())
        .copied()
}
