//! Parser module — split a source file into documentation/code sections.

pub mod intervals;
pub mod lines;
pub mod sections;
pub mod strip;

use crate::error::ParseError;
use crate::language::Language;
use crate::model::Section;

/// Parse source text into sections according to the language's comment styles.
pub fn parse(text: &str, lang: &Language) -> Result<Vec<Section>, ParseError> {
    let lines = lines::split_lines(text);
    let intervals = intervals::find_intervals(&lines, lang.styles)?;
    Ok(sections::build_sections(&lines, &intervals))
}
