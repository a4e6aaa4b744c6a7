//! Built-in highlighter: escapes the code without colouring it.
//!
//! Needs no external binary, which keeps `mint` usable (and testable) on
//! machines without Pygments.

use crate::error::{Error, HighlightError};
use crate::highlight::{wrap_highlight, Highlighter};
use crate::render::html_escape;

pub struct Plain;

impl Highlighter for Plain {
    fn check(&self) -> Result<(), Error> {
        Ok(())
    }

    fn highlight(&self, code: &str, _language: &str) -> Result<String, HighlightError> {
        Ok(wrap_highlight(&html_escape(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::unwrap_highlight;
    use crate::parser::lines::newline_count;

    #[test]
    fn escapes_markup() {
        let html = Plain.highlight("if a < b && c {}\n", "rust").unwrap();
        assert_eq!(
            html,
            "<div class=\"highlight\"><pre>if a &lt; b &amp;&amp; c {}\n</pre></div>"
        );
    }

    #[test]
    fn keeps_line_count() {
        let code = "a\n\nb\n  c\n";
        let html = Plain.highlight(code, "text").unwrap();
        assert_eq!(newline_count(unwrap_highlight(&html)), newline_count(code));
    }
}
