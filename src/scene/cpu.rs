use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{Rgba, RgbaImage, imageops};

use crate::{
    color::domain::SceneColor,
    foundation::core::Position3,
    foundation::error::ThumbnailResult,
    paths::host::resolve_host_path,
    scene::renderer::{RenderStatus, SceneRenderer},
    scene::template::{LayerDef, RectDef, SceneTemplate},
    text::layout::{ASCENT_RATIO, LayoutFrame},
};

#[derive(Clone, Debug, PartialEq)]
struct TitleText {
    body: String,
    size: f64,
    position: Position3,
}

/// CPU compositor that renders a [`SceneTemplate`] to PNG with the `image` crate.
///
/// Image nodes are decoded when set, so `set_scene_image` reports load failures immediately.
/// Title text is represented by its plate layer only.
// TODO: rasterize the title glyphs once a font asset is part of the scene template.
#[derive(Debug)]
pub struct CpuSceneRenderer {
    template: SceneTemplate,
    template_dir: PathBuf,
    working_dir: PathBuf,
    colors: BTreeMap<String, [u8; 4]>,
    switches: BTreeMap<String, bool>,
    images: BTreeMap<String, Option<RgbaImage>>,
    title: Option<TitleText>,
}

impl CpuSceneRenderer {
    /// Load and validate a template file. The template's directory becomes the
    /// [`SceneRenderer::template_dir`].
    pub fn from_template_path(path: impl AsRef<Path>) -> ThumbnailResult<Self> {
        let path = path.as_ref();
        let template = SceneTemplate::from_path(path)?;
        let template_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self::new(template, template_dir))
    }

    /// Build from an already validated template.
    ///
    /// The working directory starts as `.` (the process working directory).
    pub fn new(template: SceneTemplate, template_dir: impl Into<PathBuf>) -> Self {
        let colors = template
            .colors
            .iter()
            .map(|(k, c)| (k.clone(), SceneColor::Bytes(c.to_bytes()).to_rgba8()))
            .collect();
        let switches = template.switches.clone();
        let images = template.images.iter().map(|k| (k.clone(), None)).collect();
        Self {
            template,
            template_dir: template_dir.into(),
            working_dir: PathBuf::from("."),
            colors,
            switches,
            images,
            title: None,
        }
    }

    /// Composite all visible layers into a fresh canvas.
    pub fn compose(&self) -> RgbaImage {
        let canvas = self.template.canvas;
        let mut out = RgbaImage::new(canvas.width, canvas.height);

        for layer in &self.template.layers {
            if let Some(switch) = layer.visible_when() {
                if !self.switches.get(switch).copied().unwrap_or(false) {
                    continue;
                }
            }
            match layer {
                LayerDef::Fill { color, .. } => {
                    if let Some(c) = self.colors.get(color) {
                        fill_rect(&mut out, (0, 0, canvas.width, canvas.height), *c);
                    }
                }
                LayerDef::Image { image, rect, .. } => {
                    if let Some(Some(img)) = self.images.get(image) {
                        draw_image(&mut out, img, *rect);
                    }
                }
                LayerDef::TitlePlate { color, .. } => {
                    if let (Some(c), Some(plate)) = (self.colors.get(color), self.title_plate_px())
                    {
                        fill_rect(&mut out, plate, *c);
                    }
                }
            }
        }

        out
    }

    /// Pixel rect `(x, y, w, h)` covering the title block, if there is any title text.
    fn title_plate_px(&self) -> Option<(u32, u32, u32, u32)> {
        let title = self.title.as_ref().filter(|t| !t.body.is_empty())?;
        let canvas = self.template.canvas;
        let half_width = self.template.ortho_half_width;
        let px_per_unit = f64::from(canvas.width) / (2.0 * half_width);

        let lines = (title.body.matches('\n').count() + 1) as f64;
        let line_height = title.size * ASCENT_RATIO;
        let margin = 0.5 * line_height;
        let top_units = title.position.y + line_height + margin;
        let height_units = lines * line_height + (lines - 1.0) * margin + 2.0 * margin;

        let center_y = f64::from(canvas.height) / 2.0;
        let y0 = (center_y - top_units * px_per_unit).max(0.0);
        let y1 = (center_y - (top_units - height_units) * px_per_unit).min(f64::from(canvas.height));
        if y1 <= y0 {
            return None;
        }
        Some((0, y0 as u32, canvas.width, (y1 - y0).ceil() as u32))
    }

    fn write_png(&self, path: &Path) -> ThumbnailResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.compose()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn fill_rect(out: &mut RgbaImage, (x, y, w, h): (u32, u32, u32, u32), color: [u8; 4]) {
    let x1 = x.saturating_add(w).min(out.width());
    let y1 = y.saturating_add(h).min(out.height());
    for py in y..y1 {
        for px in x..x1 {
            out.put_pixel(px, py, Rgba(color));
        }
    }
}

fn draw_image(out: &mut RgbaImage, img: &RgbaImage, rect: RectDef) {
    let (cw, ch) = (f64::from(out.width()), f64::from(out.height()));
    let [x, y, w, h] = rect;
    let target_w = (w * cw).round().max(1.0) as u32;
    let target_h = (h * ch).round().max(1.0) as u32;
    let scaled = imageops::resize(img, target_w, target_h, imageops::FilterType::Triangle);
    imageops::overlay(out, &scaled, (x * cw).round() as i64, (y * ch).round() as i64);
}

impl SceneRenderer for CpuSceneRenderer {
    fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn set_working_dir(&mut self, dir: &Path) {
        self.working_dir = dir.to_path_buf();
    }

    fn layout_frame(&self) -> LayoutFrame {
        self.template.layout_frame()
    }

    fn set_scene_image(&mut self, node: &str, host_path: &str) -> bool {
        let path = resolve_host_path(&self.working_dir, host_path);
        let Some(slot) = self.images.get_mut(node) else {
            tracing::warn!(node, "scene has no image node with this id");
            return false;
        };
        match image::open(&path) {
            Ok(img) => {
                *slot = Some(img.to_rgba8());
                true
            }
            Err(e) => {
                tracing::debug!(node, path = %path.display(), error = %e, "image has no data");
                *slot = None;
                false
            }
        }
    }

    fn set_scene_color(&mut self, node: &str, color: SceneColor) {
        match self.colors.get_mut(node) {
            Some(slot) => *slot = color.to_rgba8(),
            None => tracing::warn!(node, "scene has no color node with this id"),
        }
    }

    fn set_scene_text(&mut self, value: &str, size: f64, position: Position3) {
        self.title = Some(TitleText {
            body: value.to_owned(),
            size,
            position,
        });
    }

    fn set_switch(&mut self, node: &str, on: bool) {
        match self.switches.get_mut(node) {
            Some(slot) => *slot = on,
            None => tracing::warn!(node, "scene has no switch node with this id"),
        }
    }

    fn render_to(&mut self, host_path: &str) -> RenderStatus {
        let path = resolve_host_path(&self.working_dir, host_path);
        match self.write_png(&path) {
            Ok(()) => RenderStatus::Finished,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "render failed");
                RenderStatus::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/cpu.rs"]
mod tests;
