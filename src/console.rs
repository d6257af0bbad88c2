//! Console output for command results.

use std::io::{self, Write};

/// Destination of the result strings a command produces.
///
/// The binary writes to stdout; tests capture lines instead.
#[derive(Debug)]
pub struct Console {
    captured: Option<Vec<String>>,
}

impl Console {
    /// Console writing to standard output.
    pub fn stdout() -> Self {
        Self { captured: None }
    }

    /// Console that records every emitted string.
    pub fn capture() -> Self {
        Self {
            captured: Some(Vec::new()),
        }
    }

    /// Deliver one result string.
    pub fn emit(&mut self, output: &str) {
        match &mut self.captured {
            Some(lines) => lines.push(output.to_string()),
            None => {
                write_line(&mut io::stdout().lock(), output);
            }
        }
    }

    /// Strings emitted so far; always empty for a stdout console.
    pub fn captured(&self) -> &[String] {
        self.captured.as_deref().unwrap_or(&[])
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Write `output` as one line. A failed write is only logged.
fn write_line(out: &mut impl Write, output: &str) -> bool {
    match writeln!(out, "{}", output).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("dropped command output: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn capture_keeps_lines_in_order() {
        let mut console = Console::capture();
        console.emit("first");
        console.emit("second");
        assert_eq!(console.captured(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn line_is_terminated() {
        let mut buf = Vec::new();
        assert!(write_line(&mut buf, "No domains known"));
        assert_eq!(buf, b"No domains known\n");
    }

    #[test]
    fn closed_output_is_not_an_error() {
        assert!(!write_line(&mut Closed, "No domains known"));
    }
}
