use std::io;
use std::io::Write;
use std::iter::repeat;

use crate::app::aggregate::Attempt;
use crate::time::timeunit::DurationDisplay;

/// Live status line over an interactive terminal. One line is occupied at a
/// time; renders for the same key overwrite it in place with a carriage
/// return, and a render for a different key first commits the shown line to
/// scrollback with a newline.
pub struct StatusLine<W> {
    out: W,
    current_key: Option<String>,
    current_len: usize,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_key: None,
            current_len: 0,
        }
    }

    pub fn render(&mut self, key: &str, attempt: &Attempt) -> io::Result<()> {
        if self.current_key.as_deref() != Some(key) {
            if self.current_key.is_some() {
                writeln!(self.out)?;
            }
            self.current_len = 0;
            self.current_key = Some(key.to_owned());
        }
        let line = format!(
            "{}: {}/{} {}",
            key,
            attempt.successes,
            attempt.attempts,
            DurationDisplay::from(attempt.elapsed)
        );
        write!(self.out, "\r{}", line)?;
        let width = line.chars().count();
        if width < self.current_len {
            // Erase whatever the longer previous render left behind.
            let padding: String = repeat(' ').take(self.current_len - width).collect();
            write!(self.out, "{}", padding)?;
        }
        self.current_len = width;
        self.out.flush()
    }

    /// Commits the shown line, then prints any output the last attempt left
    /// buffered as a trailing block.
    pub fn finish(&mut self, trailing: Option<&str>) -> io::Result<()> {
        if self.current_key.take().is_some() {
            writeln!(self.out)?;
        }
        if let Some(text) = trailing {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()
    }
}
