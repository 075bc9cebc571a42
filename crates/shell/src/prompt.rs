//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use storefront_core::DomainError;

use crate::errors::warning_for;

/// Whether a menu loop keeps going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Exit was chosen, the session finished, or input ended.
    Done,
}

/// Asks questions on `output` and reads the answers from `input`.
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted; callers
/// treat that as a request to stop.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn warn(&mut self, text: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "warning: {text}")
    }

    /// Ask a free-text question. The answer is trimmed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Ask until the answer parses as `T`, warning about each rejected answer.
    pub fn ask_parsed<T>(&mut self, question: &str) -> io::Result<Option<T>>
    where
        T: FromStr<Err = DomainError>,
    {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.warn(warning_for(&err))?,
            }
        }
    }

    /// Show a numbered menu and return the index of the chosen option.
    ///
    /// Options can be picked by number or by label (case-insensitive).
    /// Unrecognized answers re-show the menu.
    pub fn choose(&mut self, title: &str, options: &[&str]) -> io::Result<Option<usize>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{title}")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {option}", i + 1)?;
            }

            let Some(answer) = self.ask(">")? else {
                return Ok(None);
            };
            match match_option(&answer, options) {
                Some(index) => return Ok(Some(index)),
                None => self.warn(format_args!("unknown choice {answer:?}"))?,
            }
        }
    }
}

fn match_option(answer: &str, options: &[&str]) -> Option<usize> {
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options.iter().position(|o| o.eq_ignore_ascii_case(answer))
}
