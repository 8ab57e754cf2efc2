use crate::presentation::Style;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt/answer channel. Production wraps stdin/stdout; tests
/// feed a scripted `&[u8]` and capture a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn say(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print a blank line, the question, and read one answer line.
    /// Returns `None` once input is exhausted; invalid UTF-8 becomes U+FFFD.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
