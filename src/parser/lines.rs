//! Physical line splitting that keeps line terminators.

/// Split text into physical lines.
///
/// Every line but the last keeps its `\n`, so joining any contiguous slice
/// of the result gives back the matching slice of `text`. A trailing newline
/// yields a final empty line, and empty input yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    if text.is_empty() || text.ends_with('\n') {
        lines.push("");
    }
    lines
}

/// Number of `\n` characters in `text`.
pub fn newline_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
