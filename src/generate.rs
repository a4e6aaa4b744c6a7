//! Per-file pipeline: read, parse, format, render, write.
//!
//! Files are independent of each other. The only shared data is the
//! read-only [`Context`], so they run in parallel and a failure in one file
//! never reaches another.

use crate::error::{Error, FileError, HighlightError};
use crate::highlight::{self, Highlighter};
use crate::language::{self, Language};
use crate::model::{FormattedSection, Page, Section, SourceFile};
use crate::parser::{self, lines::newline_count, strip::strip_docs};
use crate::render::{self, RenderConfig, Renderer};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Everything a run shares across files, built before any file is processed.
pub struct Context {
    pub config: RenderConfig,
    /// Every source file in the run, each with its own page name.
    pub files: Vec<SourceFile>,
    pub highlighter: Box<dyn Highlighter>,
    pub renderer: Box<dyn Renderer>,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    /// (source, page) for every page written.
    pub written: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<Error>,
}

/// Document every file in the context, in parallel.
pub fn run(ctx: &Context) -> Report {
    let results: Vec<Result<PathBuf, Error>> =
        ctx.files.par_iter().map(|file| process_file(ctx, file)).collect();

    let mut report = Report::default();
    for (file, result) in ctx.files.iter().zip(results) {
        match result {
            Ok(dest) => report.written.push((file.path.clone(), dest)),
            Err(e) => report.failed.push(e),
        }
    }
    report
}

/// Generate the page for one source file and return where it was written.
pub fn process_file(ctx: &Context, file: &SourceFile) -> Result<PathBuf, Error> {
    let path = file.path.as_path();
    let source = fs::read_to_string(path).map_err(|e| Error::file(path, FileError::Read(e)))?;
    let page_text = render_source(ctx, path, &source).map_err(|e| Error::file(path, e))?;

    let dest = ctx.config.output_dir.join(format!(
        "{}.{}",
        file.name,
        ctx.renderer.file_extension()
    ));
    fs::write(&dest, page_text).map_err(|source| {
        Error::file(
            path,
            FileError::Write {
                path: dest.clone(),
                source,
            },
        )
    })?;

    Ok(dest)
}

/// Turn source text into a rendered page, without touching the filesystem.
pub fn render_source(ctx: &Context, path: &Path, source: &str) -> Result<String, FileError> {
    let lang = language::for_path(path);
    let sections = parser::parse(source, lang)?;
    let formatted = format_sections(&sections, lang, ctx.highlighter.as_ref())?;

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    let page = Page {
        title,
        sections: formatted,
        files: &ctx.files,
    };
    Ok(ctx.renderer.render(&page))
}

/// Render the docs of every section and highlight all code in one pass.
pub fn format_sections(
    sections: &[Section],
    lang: &Language,
    highlighter: &dyn Highlighter,
) -> Result<Vec<FormattedSection>, HighlightError> {
    let code: String = sections.iter().map(|s| s.code.as_str()).collect();
    let counts: Vec<usize> = sections.iter().map(|s| newline_count(&s.code)).collect();

    let highlighted = highlighter.highlight(&code, lang.name)?;
    let fragments = highlight::realign(highlight::unwrap_highlight(&highlighted), &counts);

    Ok(sections
        .iter()
        .zip(fragments)
        .enumerate()
        .map(|(index, (section, fragment))| FormattedSection {
            index,
            start_line: section.start_line,
            docs_html: render::markdown(&strip_docs(&section.docs)),
            code_html: highlight::wrap_highlight(&fragment),
        })
        .collect())
}

/// Copy the `.css` and `.js` files of the template directory to the output
/// directory so the pages can link to them.
pub fn copy_static_files(template_dir: &Path, output_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    for entry in fs::read_dir(template_dir)? {
        let src = entry?.path();
        let is_asset = matches!(
            src.extension().and_then(|e| e.to_str()),
            Some("css" | "js")
        );
        if !is_asset || !src.is_file() {
            continue;
        }
        if let Some(name) = src.file_name() {
            let dest = output_dir.join(name);
            fs::copy(&src, &dest)?;
            copied.push(dest);
        }
    }
    copied.sort();
    Ok(copied)
}
