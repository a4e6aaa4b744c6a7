//! Pygments highlighter — runs `pygmentize` as a child process.

use crate::error::{Error, HighlightError};
use crate::highlight::Highlighter;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

pub struct Pygments {
    program: String,
}

impl Pygments {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> HighlightError {
        HighlightError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for Pygments {
    fn default() -> Self {
        Self::new("pygmentize")
    }
}

impl Highlighter for Pygments {
    fn check(&self) -> Result<(), Error> {
        let found = Command::new(&self.program)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        if found {
            Ok(())
        } else {
            Err(Error::Environment(format!(
                "no {} found. Try running `pip install pygments`",
                self.program
            )))
        }
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        // stripnl=False keeps leading and trailing blank lines, which the
        // line-count realignment depends on.
        let mut child = Command::new(&self.program)
            .args(["-l", language, "-f", "html", "-O", "stripnl=False,encoding=utf-8"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.spawn_error(std::io::Error::other("stdin not captured")))?;

        // Feed stdin from a second thread so a full stdout pipe cannot deadlock us.
        let (output, written) = thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(code.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (output, written)
        });
        let output = output.map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(HighlightError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(|e| self.spawn_error(e))?;

        String::from_utf8(output.stdout).map_err(|_| HighlightError::InvalidOutput {
            program: self.program.clone(),
        })
    }
}
