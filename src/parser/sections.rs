//! Section building — pair each comment interval with the code after it.

use crate::model::{Interval, Section};

/// Partition `lines` into sections, one per interval.
///
/// `intervals` must be sorted and disjoint. When the file does not open
/// with a comment (including a file with no comments at all), a zero-length
/// interval at line 0 is synthesized so the leading code gets a section of
/// its own with empty docs.
pub fn build_sections(lines: &[&str], intervals: &[Interval]) -> Vec<Section> {
    let mut bounds: Vec<Interval> = Vec::with_capacity(intervals.len() + 1);
    if intervals.first().map_or(true, |iv| iv.start > 0) {
        bounds.push(Interval::new(0, 0));
    }
    bounds.extend_from_slice(intervals);

    bounds
        .iter()
        .enumerate()
        .map(|(i, iv)| {
            let code_end = bounds.get(i + 1).map_or(lines.len(), |next| next.start);
            Section {
                start_line: iv.start,
                docs: lines[iv.start..iv.end()].concat(),
                code: lines[iv.end()..code_end].concat(),
            }
        })
        .collect()
}
