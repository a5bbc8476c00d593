//! Line-oriented prompts over any reader/writer pair

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::Result;

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number: ";

/// Reads operator answers one line at a time.
///
/// End of input surfaces as an `UnexpectedEof` I/O error.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn show(&mut self, label: &str) -> Result<()> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show `label` and read the rest of the line
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.show(label)?;
        self.read_line()
    }

    /// Show `label` and keep reading until a number parses
    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        self.show(label)?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.show(INVALID_NUMBER)?,
            }
        }
    }

    /// "yes" in any case means true; everything else is false
    pub fn ask_yes_no(&mut self, label: &str) -> Result<bool> {
        let answer = self.ask(label)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }
}
