use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use thumbnail_renderer::{
    BatchOpts, CpuSceneRenderer, Manifest, RecordingScene, RendererKind, SceneRenderer,
    SceneTemplate,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "thumbnail-renderer", version)]
struct Cli {
    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every entry of a manifest.
    Batch(BatchArgs),
    /// Validate a manifest and every entry's options without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Batch manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Scene template JSON. Relative paths in the manifest resolve against its directory.
    #[arg(long)]
    template: PathBuf,

    /// Renderer variant used for every entry.
    #[arg(long, value_enum)]
    kind: RendererKind,

    /// Resolve relative paths against the process working directory instead.
    #[arg(long)]
    no_chdir: bool,

    /// Configure a recording scene and report, without writing any images.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Batch manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Renderer variant the manifest is meant for.
    #[arg(long, value_enum)]
    kind: RendererKind,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result = match cli.cmd {
        Command::Batch(args) => cmd_batch(args),
        Command::Check(args) => cmd_check(args),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("thumbnail_renderer=info"));

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    }
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<bool> {
    let mut scene: Box<dyn SceneRenderer> = if args.dry_run {
        let template = SceneTemplate::from_path(&args.template)
            .with_context(|| format!("load scene template '{}'", args.template.display()))?;
        Box::new(
            RecordingScene::new(template_dir(&args.template))
                .with_layout_frame(template.layout_frame()),
        )
    } else {
        Box::new(
            CpuSceneRenderer::from_template_path(&args.template)
                .with_context(|| format!("load scene template '{}'", args.template.display()))?,
        )
    };

    let opts = BatchOpts {
        change_working_directory: !args.no_chdir,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = thumbnail_renderer::run_batch_report(
        &args.manifest,
        args.kind,
        scene.as_mut(),
        &opts,
        &mut out,
    )?;
    Ok(report.is_success())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<bool> {
    let manifest = Manifest::from_path(&args.manifest)?;
    let problems = thumbnail_renderer::check_manifest(&manifest, args.kind);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (image, err) in &problems {
        writeln!(out, "Invalid options for {image}: {err}")?;
    }
    writeln!(
        out,
        "Checked {} entries for {}: {} invalid.",
        manifest.entries.len(),
        args.kind,
        problems.len()
    )?;
    Ok(problems.is_empty())
}

fn template_dir(template: &Path) -> PathBuf {
    match template.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
