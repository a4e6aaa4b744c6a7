//! mint — literate-style documentation from commented source code.
//!
//! Every file becomes one HTML page where comments, rendered as Markdown,
//! sit beside the code they describe. Two modes:
//!
//! - **file mode**: `mint -o docs src/*.js lib/`
//! - **stdin mode**: `mint -l py < script.py > script.html`

mod error;
mod generate;
mod highlight;
mod language;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "mint",
    version,
    about = "Generate side-by-side HTML documentation from commented source files"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long, default_value = "docs")]
    output: PathBuf,

    /// Template directory: default.html replaces the built-in layout
    /// (${title}, ${files} and ${sections} are substituted) and its .css/.js
    /// files are copied next to the pages.
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Code highlighter: pygments (default) or plain
    #[arg(long, default_value = "pygments")]
    highlighter: String,

    /// Language extension for stdin mode, e.g. `js` or `py`
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Report every page written
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = render::RenderConfig {
        output_dir: cli.output.clone(),
        template_dir: cli.template.clone(),
        format: cli.format.clone(),
    };

    // Pre-flight: a missing highlighter stops the run before any file is read.
    let highlighter = highlight::create_highlighter(&cli.highlighter)?;
    highlighter.check()?;
    let renderer = render::create_renderer(&config)?;

    let ctx = generate::Context {
        config,
        files: Vec::new(),
        highlighter,
        renderer,
    };

    if cli.files.is_empty() {
        return stdin_mode(&cli, &ctx);
    }

    file_mode(&cli, ctx)
}

/// stdin mode: read one source from stdin, write its page to stdout.
fn stdin_mode(cli: &Cli, ctx: &generate::Context) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let name = match cli.language {
        Some(ref ext) => format!("stdin.{}", ext.trim_start_matches('.')),
        None => "stdin".to_string(),
    };
    let page = generate::render_source(ctx, Path::new(&name), &input)
        .with_context(|| format!("failed to document {}", name))?;
    print!("{}", page);
    Ok(())
}

/// file mode: document every input file into the output directory.
fn file_mode(cli: &Cli, mut ctx: generate::Context) -> Result<()> {
    // Resolve inputs before touching the output directory.
    let inputs = collect_inputs(&cli.files)?;
    if inputs.is_empty() {
        anyhow::bail!("no input files");
    }
    ctx.files = render::source_files(inputs);

    let output_dir = &ctx.config.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    if let Some(ref template_dir) = ctx.config.template_dir {
        let copied = generate::copy_static_files(template_dir, output_dir).with_context(|| {
            format!("failed to copy static files from {}", template_dir.display())
        })?;
        if cli.verbose {
            for dest in &copied {
                eprintln!("mint: copied {}", dest.display());
            }
        }
    }

    let report = generate::run(&ctx);
    if cli.verbose {
        for (source, dest) in &report.written {
            eprintln!("mint: {} -> {}", source.display(), dest.display());
        }
    }
    for err in &report.failed {
        eprintln!("error: {}", err);
    }
    if !report.failed.is_empty() {
        anyhow::bail!(
            "{} of {} files failed",
            report.failed.len(),
            ctx.files.len()
        );
    }

    Ok(())
}

/// Resolve command-line inputs into a sorted, duplicate-free list of files.
///
/// Each input is a file, a directory (its known-language files, not
/// recursive) or a glob pattern.
fn collect_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for input in inputs {
        let path = Path::new(input);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            known_sources_in(path)?
        } else {
            glob_files(input)?
        };
        if found.is_empty() {
            eprintln!("warning: no files matched: {}", input);
        }
        files.extend(found);
    }
    Ok(files.into_iter().collect())
}

fn known_sources_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(language::is_known)
        })
        .collect())
}

fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    Ok(glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_input_keeps_known_languages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("b.py"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_inputs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.js"), dir.path().join("b.py")]);
    }

    #[test]
    fn glob_input() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.rb"), "").unwrap();
        fs::write(dir.path().join("b.rb"), "").unwrap();
        fs::write(dir.path().join("c.js"), "").unwrap();

        let pattern = format!("{}/*.rb", dir.path().display());
        let files = collect_inputs(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn repeated_inputs_are_deduplicated() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.js");
        fs::write(&file, "").unwrap();

        let arg = file.to_string_lossy().to_string();
        let files = collect_inputs(&[arg.clone(), arg]).unwrap();
        assert_eq!(files, vec![file]);
    }
}
