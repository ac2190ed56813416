use std::{io::Write, path::Path};

use anyhow::Context as _;

use crate::{
    batch::manifest::{Entry, Manifest},
    batch::report::{BatchReport, RenderOutcome},
    foundation::error::{ThumbnailError, ThumbnailResult},
    scene::renderer::SceneRenderer,
    thumbnail::contract::RendererKind,
};

/// Batch-wide options.
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Switch the scene's working directory to its template directory before each entry.
    pub change_working_directory: bool,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            change_working_directory: true,
        }
    }
}

/// Render every entry of the manifest at `manifest_path` and return the failed image names.
///
/// A malformed manifest fails the whole call before anything renders. Per-entry failures are
/// written to `out` and collected; they never stop the batch.
pub fn run_batch(
    manifest_path: &Path,
    kind: RendererKind,
    scene: &mut dyn SceneRenderer,
    out: &mut dyn Write,
) -> ThumbnailResult<Vec<String>> {
    run_batch_report(manifest_path, kind, scene, &BatchOpts::default(), out)
        .map(|report| report.failed_images())
}

/// Like [`run_batch`], with explicit options and the full per-entry report.
#[tracing::instrument(skip(manifest_path, scene, opts, out), fields(manifest = %manifest_path.display()))]
pub fn run_batch_report(
    manifest_path: &Path,
    kind: RendererKind,
    scene: &mut dyn SceneRenderer,
    opts: &BatchOpts,
    out: &mut dyn Write,
) -> ThumbnailResult<BatchReport> {
    let manifest = Manifest::from_path(manifest_path)?;
    tracing::info!(entries = manifest.entries.len(), "manifest loaded");
    render_manifest(&manifest, kind, scene, opts, out)
}

/// Render an already loaded manifest, strictly in entry order.
pub fn render_manifest(
    manifest: &Manifest,
    kind: RendererKind,
    scene: &mut dyn SceneRenderer,
    opts: &BatchOpts,
    out: &mut dyn Write,
) -> ThumbnailResult<BatchReport> {
    let mut report = BatchReport::default();

    for entry in &manifest.entries {
        let outcome = match render_entry(manifest, entry, kind, scene, opts) {
            Ok(()) => {
                tracing::info!(image = %entry.image, "rendered");
                RenderOutcome::success(&entry.image)
            }
            Err(e) => {
                tracing::warn!(image = %entry.image, error = %e, "entry failed");
                RenderOutcome::failure(&entry.image, e.to_string())
            }
        };
        writeln!(out, "{outcome}").context("write batch progress")?;
        report.outcomes.push(outcome);
    }

    write!(out, "{report}").context("write batch summary")?;
    out.flush().context("flush batch summary")?;
    tracing::info!(
        succeeded = report.succeeded_count(),
        failed = report.outcomes.len() - report.succeeded_count(),
        "batch done"
    );
    Ok(report)
}

fn render_entry(
    manifest: &Manifest,
    entry: &Entry,
    kind: RendererKind,
    scene: &mut dyn SceneRenderer,
    opts: &BatchOpts,
) -> ThumbnailResult<()> {
    let renderer = kind.build(manifest.input_file(entry), &entry.options)?;
    renderer.render(
        scene,
        &manifest.output_file(entry),
        opts.change_working_directory,
    )
}

/// Check every entry's options against `kind` without touching a scene.
///
/// Returns the offending image names with their configuration errors, in manifest order.
pub fn check_manifest(manifest: &Manifest, kind: RendererKind) -> Vec<(String, ThumbnailError)> {
    manifest
        .entries
        .iter()
        .filter_map(|entry| {
            kind.build(manifest.input_file(entry), &entry.options)
                .err()
                .map(|e| (entry.image.clone(), e))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/batch/runner.rs"]
mod tests;
