//! Batch thumbnail rendering over a parameterized scene template.
//!
//! A JSON manifest lists input images and per-image options. Every entry is handed to one
//! [`ThumbnailRenderer`] variant, which configures a [`SceneRenderer`] (image node, domain
//! color, title text, boolean switches) and asks it to render a still.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`Manifest::from_path`] validates the manifest; any problem aborts the batch.
//! 2. **Build**: [`RendererKind::build`] turns an entry's options into a renderer variant,
//!    rejecting keys the variant does not know.
//! 3. **Render**: [`ThumbnailRenderer::render`] sets up the scene and renders to the entry's
//!    output path, translated to the host convention by [`translate_path`].
//! 4. **Report**: per-entry outcomes are collected into a [`BatchReport`]; failures never stop
//!    the batch.
//!
//! Entries are processed strictly one at a time, in manifest order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod batch;
mod color;
mod foundation;
mod paths;
mod scene;
mod text;
mod thumbnail;

pub use batch::manifest::{Entry, Manifest};
pub use batch::report::{BatchReport, RenderOutcome};
pub use batch::runner::{BatchOpts, check_manifest, render_manifest, run_batch, run_batch_report};
pub use color::domain::{
    ColorChannels, DEFAULT_DOMAIN_COLOR, DOMAIN_COLORS, SceneColor, resolve_domain_color,
};
pub use color::hex::{Rgb8, parse_hex};
pub use foundation::core::{Canvas, Position3};
pub use foundation::error::{ThumbnailError, ThumbnailResult};
pub use paths::host::{HOST_RELATIVE_PREFIX, resolve_host_path, translate_path};
pub use scene::cpu::CpuSceneRenderer;
pub use scene::recording::{ImageLoadPolicy, RecordingScene, SceneCall};
pub use scene::renderer::{
    DOMAIN_COLOR_NODE, IMAGE_EXISTS_SWITCH, INPUT_IMAGE_NODE, RenderStatus, SceneRenderer,
    TEXT_EXISTS_SWITCH,
};
pub use scene::template::{LayerDef, RectDef, SceneTemplate};
pub use text::layout::{
    ASCENT_RATIO, CANVAS_ASPECT, EDGE_OFFSET_RATIO, LINE_HEIGHT_FRACTION, LayoutFrame,
    LayoutMode, NOMINAL_TEXT_SIZE, ORTHO_HALF_WIDTH, TextLayout, layout_title, layout_title_in,
};
pub use thumbnail::contract::{RendererKind, ThumbnailRenderer};
pub use thumbnail::general::{GeneralOptions, GeneralRenderer};
pub use thumbnail::poster_frame::{PosterFrameOptions, PosterFrameRenderer};
pub use thumbnail::title_card::{TitleCardOptions, TitleCardRenderer};
pub use thumbnail::youtube::{YouTubeOptions, YouTubeRenderer};
