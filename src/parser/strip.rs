//! Comment-marker stripping for documentation blocks.
//!
//! The first line decides the comment family and the baseline indent: the
//! whitespace right after its marker. Every line then loses its marker plus
//! at most that much whitespace, so deeper indentation (code samples in
//! Markdown, nested lists) survives. Lines without the marker are dropped.
//!
//! Block comments are first normalized so that `/*` and `*/` disappear and
//! every line is led by a single `*`, then stripped like a line family.

use crate::parser::intervals::BLOCK_OPEN;
use regex::Regex;
use std::sync::LazyLock;

/// Single-line markers, in detection order.
const LINE_MARKERS: &[&str] = &["//", "#", ";"];

/// Leading character of the inner lines of a block comment.
const BLOCK_PAD: &str = "*";

/// `/*` plus any following run of `*` and whitespace, up to the last `*` or
/// newline of that run. The horizontal whitespace after it is kept in `$1`.
static RE_BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*(?:[*\s]*[*\n])?([ \t]*)").unwrap());

/// `*/` plus the run of `*` and whitespace in front of it.
static RE_BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*\s]*\*/\s*$").unwrap());

/// Remove comment markers from a raw documentation block.
///
/// Text whose first line opens with no known marker comes back unchanged.
pub fn strip_docs(docs: &str) -> String {
    let first = docs.lines().next().unwrap_or("").trim_start();

    if let Some(marker) = LINE_MARKERS.iter().find(|m| first.starts_with(*m)) {
        return strip_marker(docs, marker);
    }

    if first.starts_with(BLOCK_OPEN) {
        return strip_marker(&normalize_block(docs), BLOCK_PAD);
    }

    docs.to_string()
}

/// Rewrite a block comment so its first line starts with `*` and the
/// closing delimiter is gone.
fn normalize_block(docs: &str) -> String {
    let opened = RE_BLOCK_OPEN.replace(docs, "*${1}");
    RE_BLOCK_CLOSE.replace(&opened, "").into_owned()
}

fn strip_marker(docs: &str, marker: &str) -> String {
    let mut lines = docs.lines();
    let indent = lines
        .next()
        .and_then(|first| first.trim_start().strip_prefix(marker))
        .map_or(0, leading_blanks);

    docs.lines()
        .filter_map(|line| strip_line(line, marker, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip `marker` and up to `indent` blanks; `None` when the marker is missing.
fn strip_line<'a>(line: &'a str, marker: &str, indent: usize) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(marker)?;
    let pad = leading_blanks(rest).min(indent);
    Some(&rest[pad..])
}

fn leading_blanks(s: &str) -> usize {
    s.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_comments() {
        assert_eq!(strip_docs("// Hello\n// world\n"), "Hello\nworld");
    }

    #[test]
    fn hash_comments() {
        assert_eq!(strip_docs("# Title\n#\n# Body\n"), "Title\n\nBody");
    }

    #[test]
    fn semicolon_comments() {
        assert_eq!(strip_docs("; key settings\n;   indented\n"), "key settings\n  indented");
    }

    #[test]
    fn indent_beyond_baseline_is_kept() {
        assert_eq!(strip_docs("//  foo\n//    bar\n"), "foo\n  bar");
    }

    #[test]
    fn short_padding_loses_only_what_it_has() {
        assert_eq!(strip_docs("//   foo\n// bar\n//baz"), "foo\nbar\nbaz");
    }

    #[test]
    fn indented_comment_block() {
        assert_eq!(strip_docs("    // a\n    //     code\n"), "a\n    code");
    }

    #[test]
    fn javadoc_block() {
        let docs = "/**\n * Foo\n *   bar\n */\n";
        assert_eq!(strip_docs(docs), "Foo\n  bar");
    }

    #[test]
    fn indented_javadoc_block() {
        let docs = "    /**\n     * Foo\n     */\n";
        assert_eq!(strip_docs(docs), "Foo");
    }

    #[test]
    fn single_line_block() {
        assert_eq!(strip_docs("/* Foo */\n"), "Foo");
        assert_eq!(strip_docs("/*** Foo ***/"), "Foo");
    }

    #[test]
    fn block_text_on_opening_line() {
        assert_eq!(strip_docs("/* Foo\n * bar\n */"), "Foo\nbar");
    }

    #[test]
    fn unterminated_block() {
        assert_eq!(strip_docs("/* a\n * b\n * c"), "a\nb\nc");
    }

    #[test]
    fn lines_without_marker_are_dropped() {
        assert_eq!(strip_docs("/*\n * kept\n dropped\n */"), "kept");
    }

    #[test]
    fn slash_wins_over_hash() {
        assert_eq!(strip_docs("// # heading\n"), "# heading");
    }

    #[test]
    fn unknown_family_passes_through() {
        let docs = "-- SQL comment\n-- more\n";
        assert_eq!(strip_docs(docs), docs);
    }

    #[test]
    fn empty_block() {
        assert_eq!(strip_docs(""), "");
    }

    #[test]
    fn stripping_is_idempotent_once_markers_are_gone() {
        let once = strip_docs("//  foo\n//    bar\n");
        assert_eq!(strip_docs(&once), once);
    }
}
