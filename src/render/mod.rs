//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;

use crate::model::{Page, SourceFile};
use anyhow::{anyhow, Context, Result};
use comrak::{markdown_to_html, ComrakOptions};
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Name of the page template looked up in the template directory.
pub const TEMPLATE_FILE: &str = "default.html";

/// Settings shared by every page of one run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory the generated pages are written to.
    pub output_dir: PathBuf,
    /// Directory holding `default.html` and static assets, if any.
    pub template_dir: Option<PathBuf>,
    /// Output format: html (default) or json.
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            template_dir: None,
            format: "html".to_string(),
        }
    }
}

/// Trait for rendering a Page into a specific output format.
pub trait Renderer: Sync {
    fn render(&self, page: &Page) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the configured format.
pub fn create_renderer(config: &RenderConfig) -> Result<Box<dyn Renderer>> {
    match config.format.as_str() {
        "html" => {
            let template = match config.template_dir {
                Some(ref dir) => load_template(dir)?,
                None => None,
            };
            Ok(Box::new(html::HtmlRenderer::new(template)))
        }
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use html or json",
            config.format
        )),
    }
}

/// Read `default.html` from the template directory, if present.
fn load_template(dir: &Path) -> Result<Option<String>> {
    if !dir.is_dir() {
        anyhow::bail!("template directory not found: {}", dir.display());
    }
    let path = dir.join(TEMPLATE_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(&path)
        .map(Some)
        .with_context(|| format!("failed to read template: {}", path.display()))
}

/// Render comment text (Markdown) to HTML.
pub fn markdown(text: &str) -> String {
    markdown_to_html(text, &ComrakOptions::default())
}

/// Derive the output file name (without extension) from a source path,
/// prefixed with its last `depth` parent directories.
/// ("lib/mint.js", 0) → "mint", ("src/lib/mint.js", 2) → "src-lib-mint"
pub fn output_name(source: &Path, depth: usize) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string_lossy().to_string());

    let parents: Vec<String> = source
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    let skip = parents.len().saturating_sub(depth);

    parents[skip..]
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(stem.as_str()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Pair every input with a page name no other input uses.
///
/// Names are bare stems where possible. Clashing inputs pull in parent
/// directories one at a time, and inputs that still clash once their
/// parents run out get their position appended.
pub fn source_files(paths: Vec<PathBuf>) -> Vec<SourceFile> {
    let mut names: Vec<String> = paths.iter().map(|p| output_name(p, 0)).collect();

    let mut depth = 0;
    loop {
        let clashing = clashing_names(&names);
        if clashing.is_empty() {
            break;
        }
        depth += 1;
        let mut changed = false;
        for i in clashing {
            let name = output_name(&paths[i], depth);
            changed |= name != names[i];
            names[i] = name;
        }
        if !changed {
            break;
        }
    }

    for i in clashing_names(&names) {
        names[i] = format!("{}-{}", names[i], i + 1);
    }

    paths
        .into_iter()
        .zip(names)
        .map(|(path, name)| SourceFile { path, name })
        .collect()
}

/// Indices of every name used more than once.
fn clashing_names(names: &[String]) -> Vec<usize> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *seen.entry(name.as_str()).or_default() += 1;
    }
    (0..names.len())
        .filter(|&i| seen[names[i].as_str()] > 1)
        .collect()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
