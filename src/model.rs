//! Data model for a parsed source file — format-agnostic.

use std::fmt;
use std::path::PathBuf;

/// A run of lines recognized as one documentation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Zero-based index of the first line.
    pub start: usize,
    /// Number of lines in the run (zero for a synthesized all-code interval).
    pub len: usize,
}

impl Interval {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last line of the interval.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// One documentation block and the code that follows it.
///
/// Concatenating `docs` and `code` of every section of a file, in order,
/// reproduces the file exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub start_line: usize,
    pub docs: String,
    pub code: String,
}

/// A section after its docs went through the markup renderer and its code
/// through the highlighter.
#[derive(Debug, Clone)]
pub struct FormattedSection {
    pub index: usize,
    pub start_line: usize,
    pub docs_html: String,
    pub code_html: String,
}

/// One input file and the unique name of its output page (no extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
}

/// Everything the presentation layer needs to produce one output document.
#[derive(Debug)]
pub struct Page<'a> {
    pub title: String,
    pub sections: Vec<FormattedSection>,
    /// Every source file in this run, for the navigation list.
    pub files: &'a [SourceFile],
}
