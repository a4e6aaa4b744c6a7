//! HTML renderer — side-by-side page with docs on the left and code on the right.
//!
//! Uses the built-in layout unless a template was loaded, in which case
//! `${title}`, `${files}` and `${sections}` in the template are substituted.

use crate::model::*;
use crate::render::{html_escape, Renderer};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(title|files|sections)\}").unwrap());

pub struct HtmlRenderer {
    template: Option<String>,
}

impl HtmlRenderer {
    pub fn new(template: Option<String>) -> Self {
        Self { template }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        let files = render_file_list(page);
        let sections = render_sections(page);

        if let Some(ref template) = self.template {
            // One pass, so placeholders inside substituted text stay literal.
            let title = html_escape(&page.title);
            return RE_PLACEHOLDER
                .replace_all(template, |caps: &Captures| match &caps[1] {
                    "title" => title.clone(),
                    "files" => files.clone(),
                    _ => sections.clone(),
                })
                .into_owned();
        }

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&page.title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; margin: 0; padding: 0; color: #252519; }\n");
        out.push_str("table { border-collapse: collapse; width: 100%; }\n");
        out.push_str("td { vertical-align: top; padding: 10px 25px 1px 25px; }\n");
        out.push_str("td.docs { width: 40%; max-width: 450px; min-width: 450px; }\n");
        out.push_str("td.code { background: #f5f5ff; border-left: 1px solid #e5e5ee; }\n");
        out.push_str("pre { margin: 0; font-size: 12px; line-height: 18px; }\n");
        out.push_str(".anchor { float: left; margin-left: -20px; opacity: 0; }\n");
        out.push_str("tr:hover .anchor { opacity: 1; }\n");
        out.push_str("#jump { position: fixed; right: 0; top: 0; padding: 5px 10px; background: #fff; }\n");
        out.push_str("#jump a { display: block; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&files);
        out.push_str("<table>\n<thead>\n");
        out.push_str(&format!(
            "<tr><th class=\"docs\"><h1>{}</h1></th><th class=\"code\"></th></tr>\n",
            html_escape(&page.title)
        ));
        out.push_str("</thead>\n<tbody>\n");
        out.push_str(&sections);
        out.push_str("</tbody>\n</table>\n");
        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Jump list linking every page of the run. Empty for a single file.
fn render_file_list(page: &Page) -> String {
    if page.files.len() < 2 {
        return String::new();
    }

    let mut out = String::from("<div id=\"jump\">\n");
    for file in page.files {
        let label = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.path.to_string_lossy().to_string());
        out.push_str(&format!(
            "  <a class=\"source\" href=\"{}.html\">{}</a>\n",
            html_escape(&file.name),
            html_escape(&label)
        ));
    }
    out.push_str("</div>\n");
    out
}

fn render_sections(page: &Page) -> String {
    let mut out = String::new();
    for section in &page.sections {
        let anchor = format!("section-{}", section.index + 1);
        out.push_str(&format!(
            "<tr id=\"{}\" data-line=\"{}\">\n",
            anchor,
            section.start_line + 1
        ));
        out.push_str("<td class=\"docs\">\n");
        out.push_str(&format!(
            "<div class=\"anchor\"><a href=\"#{}\">&#182;</a></div>\n",
            anchor
        ));
        out.push_str(&section.docs_html);
        out.push_str("</td>\n");
        out.push_str(&format!("<td class=\"code\">{}</td>\n", section.code_html));
        out.push_str("</tr>\n");
    }
    out
}
