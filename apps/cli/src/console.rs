//! # Console I/O
//!
//! Prompt-and-answer plumbing over any `BufRead` + `Write` pair.
//!
//! Answers are whitespace-delimited tokens, not lines: `apple 10 2.50` typed
//! on one line answers the name, quantity and price prompts in one go.
//!
//! ```text
//!  input line ──► split_whitespace ──► pending tokens ──► next_token()
//!                                           │
//!                                   discard_line() clears
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::ConsoleError;

/// Token reader plus output sink.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    ///
    /// `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Writes `text` without a newline and flushes so the prompt is visible.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Writes `text` on a fresh line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "\n{text}")?;
        self.writer.flush()
    }

    /// Prompts once and returns the raw token.
    pub fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        self.prompt(text)?;
        self.next_token()
    }

    /// Prompts until `parse` accepts an answer.
    ///
    /// A rejected answer prints the error, discards the rest of the line and
    /// asks again. `None` at end of input.
    pub fn ask_parsed<T, F>(&mut self, text: &str, parse: F) -> Result<Option<T>, ConsoleError>
    where
        F: Fn(&str) -> Result<T, ConsoleError>,
    {
        loop {
            let Some(token) = self.ask(text)? else {
                return Ok(None);
            };
            match parse(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "Answer rejected");
                    self.discard_line();
                    self.say(&format!("{}\n", err.user_message()))?;
                }
            }
        }
    }

    /// Gives back the output sink (used by tests to inspect the transcript).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Parses a whole-number answer for `field`.
pub fn parse_integer(field: &'static str) -> impl Fn(&str) -> Result<i64, ConsoleError> {
    move |input: &str| {
        input.parse::<i64>().map_err(|_| ConsoleError::InvalidNumber {
            field,
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut c = console("apple 10\n  2.50 \n\nfig\n");

        assert_eq!(c.next_token().unwrap().as_deref(), Some("apple"));
        assert_eq!(c.next_token().unwrap().as_deref(), Some("10"));
        assert_eq!(c.next_token().unwrap().as_deref(), Some("2.50"));
        assert_eq!(c.next_token().unwrap().as_deref(), Some("fig"));
        assert_eq!(c.next_token().unwrap(), None);
    }

    #[test]
    fn test_discard_line_drops_pending_tokens() {
        let mut c = console("9 junk junk\n3\n");

        assert_eq!(c.next_token().unwrap().as_deref(), Some("9"));
        c.discard_line();
        assert_eq!(c.next_token().unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_ask_parsed_reprompts_until_valid() {
        let mut c = console("ten\n-4\n");

        let value = c
            .ask_parsed("Enter quantity: ", parse_integer("Quantity"))
            .unwrap();
        assert_eq!(value, Some(-4));

        let out = String::from_utf8(c.into_writer()).unwrap();
        assert_eq!(out.matches("Enter quantity: ").count(), 2);
        assert!(out.contains("Quantity must be a whole number, got 'ten'"));
    }

    #[test]
    fn test_ask_parsed_returns_none_at_eof() {
        let mut c = console("oops\n");
        let value = c
            .ask_parsed("Enter quantity: ", parse_integer("Quantity"))
            .unwrap();
        assert_eq!(value, None);
    }
}
