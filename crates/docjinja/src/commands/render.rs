//! Render command - pass documents through the configuration injection hook

use crate::cli::RenderArgs;
use crate::output::{self, Status};
use anyhow::{Context, Result};
use docjinja_core::config::resolve_config_path;
use docjinja_core::{setup, App, Builder, ConfigOptions, Document, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Render each file in `args.files`
///
/// Documents are rendered in the order given; the first failure stops the
/// run. Without `--out-dir`, rendered text goes to stdout.
pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    let srcdir = fs::canonicalize(&args.source.srcdir).with_context(|| {
        format!(
            "source directory '{}' not found",
            args.source.srcdir.display()
        )
    })?;

    let config_path = resolve_config_path(&srcdir, args.source.config.as_deref());
    let config = ConfigOptions::from_file(&config_path)?;
    if verbose {
        output::status(
            Status::Step,
            &format!(
                "Loaded {} option(s) from {}",
                config.len(),
                config_path.display()
            ),
        );
    }

    let format = OutputFormat::parse(&args.format);
    if !format.is_html() {
        output::status(
            Status::Warn,
            &format!("Format '{}' is not html, sources are left as is", format),
        );
    }

    let mut app = App::new(Builder::new(args.format.clone(), format));
    setup(&mut app, &config);

    let mut rendered_count = 0;
    for file in &args.files {
        let path = fs::canonicalize(file)
            .with_context(|| format!("source file '{}' not found", file.display()))?;
        let document = Document::from_path(&srcdir, &path)?;

        let rendered = app
            .read_document(&document)
            .with_context(|| format!("failed to render '{}'", document.docname()))?;
        tracing::debug!(
            docname = document.docname(),
            bytes = rendered.len(),
            "document read"
        );

        match &args.out_dir {
            Some(out_dir) => {
                let target = output_path(out_dir, &document);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, rendered)
                    .with_context(|| format!("failed to write '{}'", target.display()))?;
                if verbose {
                    output::status(
                        Status::Step,
                        &format!("{} → {}", document.docname(), target.display()),
                    );
                }
            }
            None => output::print_document(&rendered)?,
        }
        rendered_count += 1;
    }

    if let Some(out_dir) = &args.out_dir {
        output::status(
            Status::Done,
            &format!(
                "Rendered {} document(s) into {}",
                rendered_count,
                out_dir.display()
            ),
        );
    }

    Ok(())
}

/// `<out_dir>/<docname>.<ext>`, keeping the source's extension
fn output_path(out_dir: &Path, document: &Document) -> PathBuf {
    let mut target = out_dir.to_path_buf();
    let mut parts = document.docname().split('/').peekable();
    while let Some(part) = parts.next() {
        if parts.peek().is_some() {
            target.push(part);
        } else {
            match document.extension() {
                Some(ext) => target.push(format!("{}.{}", part, ext)),
                None => target.push(part),
            }
        }
    }
    target
}
