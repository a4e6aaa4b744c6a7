//! Comment interval detection.
//!
//! Line styles are scanned first, one marker at a time, then block comments.
//! The block scan never claims a line an earlier interval already owns, so
//! the merged result is non-overlapping by construction; the final check is
//! only there to catch a broken scan.

use crate::error::ParseError;
use crate::language::CommentStyles;
use crate::model::Interval;

pub const BLOCK_OPEN: &str = "/*";
pub const BLOCK_CLOSE: &str = "*/";

/// Find every documentation interval in `lines`, sorted by start line.
pub fn find_intervals(lines: &[&str], styles: CommentStyles) -> Result<Vec<Interval>, ParseError> {
    let mut intervals = Vec::new();

    for marker in styles.line_markers() {
        intervals.extend(line_intervals(lines, marker));
    }

    if styles.block {
        let blocks = block_intervals(lines, &intervals);
        intervals.extend(blocks);
    }

    intervals.sort_by_key(|iv| iv.start);
    check_disjoint(&intervals)?;
    Ok(intervals)
}

/// Runs of consecutive lines starting with `marker` after leading whitespace.
fn line_intervals(lines: &[&str], marker: &str) -> Vec<Interval> {
    let mut found: Vec<Interval> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.trim_start().starts_with(marker) {
            continue;
        }
        match found.last_mut() {
            Some(last) if last.end() == i => last.len += 1,
            _ => found.push(Interval::new(i, 1)),
        }
    }

    found
}

/// Block comments, skipping any line claimed by `claimed`.
///
/// A block runs from its opener through the first line containing the
/// closer. A block left open at end of file ends there, and a block that
/// runs into a claimed line ends just before it.
fn block_intervals(lines: &[&str], claimed: &[Interval]) -> Vec<Interval> {
    let mut found: Vec<Interval> = Vec::new();
    let is_claimed = |i: usize, found: &[Interval]| {
        claimed.iter().chain(found.iter()).any(|iv| iv.contains(i))
    };

    let mut i = 0;
    while i < lines.len() {
        let trimmed = lines[i].trim_start();
        if !trimmed.starts_with(BLOCK_OPEN) || is_claimed(i, &found) {
            i += 1;
            continue;
        }

        let start = i;
        let mut closed = trimmed[BLOCK_OPEN.len()..].contains(BLOCK_CLOSE);
        i += 1;
        while !closed && i < lines.len() && !is_claimed(i, &found) {
            closed = lines[i].contains(BLOCK_CLOSE);
            i += 1;
        }

        found.push(Interval::new(start, i - start));
    }

    found
}

fn check_disjoint(intervals: &[Interval]) -> Result<(), ParseError> {
    for pair in intervals.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        if first.start == second.start || first.end() > second.start {
            return Err(ParseError::OverlappingIntervals { first, second });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(lines: &[&str], styles: CommentStyles) -> Vec<Interval> {
        find_intervals(lines, styles).unwrap()
    }

    fn iv(start: usize, len: usize) -> Interval {
        Interval::new(start, len)
    }

    #[test]
    fn consecutive_line_comments_merge() {
        let lines = ["// a", "// b", "x", "// c"];
        assert_eq!(find(&lines, CommentStyles::SLASH), vec![iv(0, 2), iv(3, 1)]);
    }

    #[test]
    fn indented_line_comment_matches() {
        let lines = ["fn main() {\n", "    # note\n", "}"];
        assert_eq!(find(&lines, CommentStyles::HASH), vec![iv(1, 1)]);
    }

    #[test]
    fn disabled_style_is_ignored() {
        let lines = ["# a", "// b"];
        assert_eq!(find(&lines, CommentStyles::SLASH), vec![iv(1, 1)]);
    }

    #[test]
    fn different_line_styles_stay_separate() {
        let lines = ["# a", "; b", "x"];
        let styles = CommentStyles::HASH.with_semicolon();
        assert_eq!(find(&lines, styles), vec![iv(0, 1), iv(1, 1)]);
    }

    #[test]
    fn block_scan_avoids_reclaim() {
        let lines = ["/* a", "*/", "// b"];
        assert_eq!(find(&lines, CommentStyles::C_LIKE), vec![iv(0, 2), iv(2, 1)]);
    }

    #[test]
    fn single_line_block() {
        let lines = ["/* a */", "code();"];
        let styles = CommentStyles::none().with_block();
        assert_eq!(find(&lines, styles), vec![iv(0, 1)]);
    }

    #[test]
    fn unterminated_block_ends_at_eof() {
        let lines = ["/* a", "b", "c"];
        let styles = CommentStyles::none().with_block();
        assert_eq!(find(&lines, styles), vec![iv(0, 3)]);
    }

    #[test]
    fn block_stops_before_claimed_line() {
        let lines = ["/*", "// inner", "*/"];
        assert_eq!(find(&lines, CommentStyles::C_LIKE), vec![iv(0, 1), iv(1, 1)]);
    }

    #[test]
    fn consecutive_blocks() {
        let lines = ["/* a */", "/* b", " */", "x", "/** c */"];
        let styles = CommentStyles::none().with_block();
        assert_eq!(find(&lines, styles), vec![iv(0, 1), iv(1, 2), iv(4, 1)]);
    }

    #[test]
    fn opener_inside_block_is_not_a_new_block() {
        let lines = ["/* a", "/* b", "*/", "x"];
        let styles = CommentStyles::none().with_block();
        assert_eq!(find(&lines, styles), vec![iv(0, 3)]);
    }

    #[test]
    fn no_comments() {
        let lines = ["x = 1\n", "y = 2"];
        assert!(find(&lines, CommentStyles::HASH).is_empty());
    }

    #[test]
    fn overlap_is_an_error() {
        let err = check_disjoint(&[iv(0, 2), iv(1, 1)]).unwrap_err();
        assert!(matches!(err, ParseError::OverlappingIntervals { .. }));
    }

    #[test]
    fn duplicate_start_is_an_error() {
        assert!(check_disjoint(&[iv(3, 1), iv(3, 2)]).is_err());
    }
}
