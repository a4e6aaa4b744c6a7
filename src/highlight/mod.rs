//! Highlighter module — trait-based dispatch over code highlighters.
//!
//! A highlighter must emit exactly one output line per input line: all code
//! of a file is highlighted in one call and cut back into sections by line
//! count alone (see [`realign`]).

pub mod plain;
pub mod pygments;

use crate::error::{Error, HighlightError};
use anyhow::{anyhow, Result};

/// Markup a highlighter wraps around its whole output.
pub const HIGHLIGHT_START: &str = "<div class=\"highlight\"><pre>";
pub const HIGHLIGHT_END: &str = "</pre></div>";

/// Empty span newer Pygments versions put right after `<pre>`.
const EMPTY_SPAN: &str = "<span></span>";

pub trait Highlighter: Sync {
    /// Make sure the highlighter can run at all, before any file is processed.
    fn check(&self) -> Result<(), Error>;

    /// Highlight `code` written in `language` (a lexer name) into HTML.
    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError>;
}

/// Create a highlighter by name.
pub fn create_highlighter(name: &str) -> Result<Box<dyn Highlighter>> {
    match name {
        "pygments" | "pygmentize" => Ok(Box::new(pygments::Pygments::default())),
        "plain" | "none" => Ok(Box::new(plain::Plain)),
        _ => Err(anyhow!(
            "unknown highlighter: {}. Use pygments or plain",
            name
        )),
    }
}

/// Strip the wrapper markup from a highlighter's output.
pub fn unwrap_highlight(html: &str) -> &str {
    let html = html.trim_end();
    let html = html.strip_prefix(HIGHLIGHT_START).unwrap_or(html);
    let html = html.strip_prefix(EMPTY_SPAN).unwrap_or(html);
    html.strip_suffix(HIGHLIGHT_END).unwrap_or(html)
}

/// Wrap one section's highlighted fragment back into the wrapper markup.
pub fn wrap_highlight(fragment: &str) -> String {
    format!("{}{}{}", HIGHLIGHT_START, fragment, HIGHLIGHT_END)
}

/// Cut highlighted output for a whole file back into per-section fragments.
///
/// `counts[i]` is the number of newlines in section `i`'s code. Section `i`
/// receives the next `counts[i]` highlighted lines; the last section also
/// takes whatever remains, which covers a final line with no newline.
pub fn realign(html: &str, counts: &[usize]) -> Vec<String> {
    let lines: Vec<&str> = html.lines().collect();
    let mut cursor = 0;

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = cursor.min(lines.len());
            let end = if i + 1 == counts.len() {
                lines.len()
            } else {
                (cursor + count).min(lines.len())
            };
            cursor += count;
            lines[start..end.max(start)].join("\n")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realign_by_newline_counts() {
        let fragments = realign("L0\nL1\nL2", &[2, 1]);
        assert_eq!(fragments, vec!["L0\nL1", "L2"]);
    }

    #[test]
    fn realign_empty_section() {
        let fragments = realign("a\nb\n", &[1, 0, 1]);
        assert_eq!(fragments, vec!["a", "", "b"]);
    }

    #[test]
    fn realign_last_line_without_newline() {
        let fragments = realign("a\nb\nc", &[2, 0]);
        assert_eq!(fragments, vec!["a\nb", "c"]);
    }

    #[test]
    fn realign_short_output_does_not_panic() {
        let fragments = realign("a", &[2, 3]);
        assert_eq!(fragments, vec!["a", ""]);
    }

    #[test]
    fn unwrap_pygments_markup() {
        let html = "<div class=\"highlight\"><pre><span></span><span class=\"k\">x</span>\n</pre></div>\n";
        assert_eq!(unwrap_highlight(html), "<span class=\"k\">x</span>\n");
    }

    #[test]
    fn unwrap_leaves_bare_output_alone() {
        assert_eq!(unwrap_highlight("a\nb"), "a\nb");
    }

    #[test]
    fn unknown_highlighter() {
        assert!(create_highlighter("vim").is_err());
    }
}
