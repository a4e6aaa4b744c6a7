//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Page model directly as JSON, so custom templates can be
//! driven by another program.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str(&format!("  \"title\": \"{}\",\n", json_escape(&page.title)));

        // Files
        let files: Vec<String> = page
            .files
            .iter()
            .map(|f| json_escape(&f.path.to_string_lossy()))
            .collect();
        write_string_array(&mut out, "files", &files);

        // Sections
        out.push_str("  \"sections\": [\n");
        for (i, section) in page.sections.iter().enumerate() {
            out.push_str(&render_section_json(section));
            if i < page.sections.len() - 1 {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_section_json(section: &FormattedSection) -> String {
    let mut out = String::new();
    out.push_str("    {\n");
    out.push_str(&format!("      \"index\": {},\n", section.index));
    out.push_str(&format!("      \"start_line\": {},\n", section.start_line));
    out.push_str(&format!(
        "      \"docs_html\": \"{}\",\n",
        json_escape(&section.docs_html)
    ));
    out.push_str(&format!(
        "      \"code_html\": \"{}\"\n",
        json_escape(&section.code_html)
    ));
    out.push_str("    }");
    out
}

/// Items must already be escaped.
fn write_string_array(out: &mut String, name: &str, items: &[String]) {
    out.push_str(&format!("  \"{}\": [", name));
    for (i, item) in items.iter().enumerate() {
        let comma = if i < items.len() - 1 { ", " } else { "" };
        out.push_str(&format!("\"{}\"{}", item, comma));
    }
    out.push_str("],\n");
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
