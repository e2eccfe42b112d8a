//! Template tree copying with path templating and fragment exclusion
//!
//! Walks a source template tree and materializes a rendered copy: fragment
//! files are skipped, `{{...}}` placeholders are substituted in both file
//! content and destination paths, and shell scripts come out executable.

use super::io::TemplateIo;
use super::render::Renderer;
use crate::context::TemplateContext;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Markers for fragment files consumed by other templates, never emitted standalone
const FRAGMENT_MARKERS: &[&str] = &[".partial", ".replacement"];

/// Outcome of a tree copy
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Destination paths written, in enumeration order
    pub written: Vec<PathBuf>,

    /// Source fragment files that were skipped
    pub skipped: Vec<PathBuf>,

    /// Non-fatal problems, currently only failed execute-bit changes
    pub warnings: Vec<String>,
}

/// True when a file name carries a fragment marker past its first character.
///
/// This is a substring match, not a suffix match: `my.partial.txt` is a
/// fragment, and so is `a.partialfoo`. A name that *starts* with a marker is
/// not. Historical behavior that shipped templates rely on; change it here or
/// not at all.
pub fn is_fragment_file(name: &str) -> bool {
    FRAGMENT_MARKERS
        .iter()
        .any(|marker| matches!(name.find(marker), Some(i) if i > 0))
}

/// True when a relative path contains a placeholder opener, meaning the path
/// itself must be rendered before use
fn is_path_templated(relative: &str) -> bool {
    relative.contains('{')
}

/// True when a file name contains `.sh` past its first character.
/// Substring match, same caveat as [`is_fragment_file`].
fn is_shell_script(name: &str) -> bool {
    matches!(name.find(".sh"), Some(i) if i > 0)
}

/// Walk `source_dir` and materialize a rendered copy under `dest_dir`.
///
/// Directories are never created explicitly; they appear as a side effect of
/// writing files beneath them. Each entry is processed independently, so no
/// ordering across siblings is relied upon. The first read, render, or write
/// failure aborts the copy; files already written stay on disk.
///
/// Re-running against an empty destination is deterministic. Re-running
/// against a non-empty destination overwrites matching paths but does not
/// remove files left over from a previous, differently-templated run.
pub async fn copy_tree<I: TemplateIo>(
    io: &I,
    renderer: &Renderer,
    source_dir: &Path,
    dest_dir: &Path,
    context: &TemplateContext,
) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    for entry in io.walk(source_dir)? {
        if entry.is_dir {
            continue;
        }

        let name = entry
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if is_fragment_file(name) {
            report.skipped.push(entry.path.clone());
            continue;
        }

        // Relative-path computation, not string prefix replacement: a source
        // root that recurs later in a path must not be substituted twice.
        let relative = entry.path.strip_prefix(source_dir).with_context(|| {
            format!(
                "Entry {} is outside template directory {}",
                entry.path.display(),
                source_dir.display()
            )
        })?;

        let relative_str = relative.to_string_lossy();
        let dest_path = if is_path_templated(&relative_str) {
            let rendered = renderer
                .render_str(&relative_str, context)
                .with_context(|| format!("Failed to render destination path {}", relative.display()))?;
            dest_dir.join(rendered)
        } else {
            dest_dir.join(relative)
        };

        if let Some(warning) = write_one_file(io, renderer, &entry.path, &dest_path, context).await?
        {
            report.warnings.push(warning);
        }
        report.written.push(dest_path);
    }

    Ok(report)
}

/// Render a single template file to a known destination, then mark shell
/// scripts executable.
///
/// A failed permission change is returned as a warning rather than an error:
/// the content already landed, and the execute bit is a convenience.
pub async fn write_one_file<I: TemplateIo>(
    io: &I,
    renderer: &Renderer,
    source_file: &Path,
    dest_file: &Path,
    context: &TemplateContext,
) -> Result<Option<String>> {
    let raw = io.read_to_string(source_file).await?;
    let rendered = renderer
        .render_str(&raw, context)
        .with_context(|| format!("Failed to render {}", source_file.display()))?;
    io.write(dest_file, &rendered).await?;

    let dest_name = dest_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if is_shell_script(dest_name) {
        if let Err(err) = io.set_executable(dest_file).await {
            return Ok(Some(format!(
                "Could not mark {} executable: {:#}",
                dest_file.display(),
                err
            )));
        }
    }

    Ok(None)
}
