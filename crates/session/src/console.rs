use std::io::{self, BufRead, Write};

/// Line-oriented input/output port for the interactive loop.
pub trait Console {
    /// Reads one line without its trailing newline. `Ok(None)` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write_line(text)?;
        self.read_line()
    }
}

/// Console over any buffered reader and writer, e.g. locked stdin/stdout.
/// Prompts stay on the same line as the user's answer.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        self.read_line()
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
