use std::{collections::BTreeMap, fmt, fs::File, io::BufReader, path::Path};

use serde::Deserialize;

use crate::{
    color::hex::Rgb8,
    foundation::core::Canvas,
    foundation::error::{ThumbnailError, ThumbnailResult},
    text::layout::{LayoutFrame, ORTHO_HALF_WIDTH},
};

fn default_ortho_half_width() -> f64 {
    ORTHO_HALF_WIDTH
}

/// Scene template for [`crate::CpuSceneRenderer`].
///
/// Declares the named nodes thumbnail renderers may set, each with a default, and the
/// layers composited bottom-to-top on render.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneTemplate {
    /// Output size in pixels.
    #[serde(default)]
    pub canvas: Canvas,
    /// Camera orthographic half width in scene units; maps text geometry onto pixels.
    #[serde(default = "default_ortho_half_width")]
    pub ortho_half_width: f64,
    /// Color nodes with their default values.
    #[serde(default)]
    pub colors: BTreeMap<String, Rgb8>,
    /// Switch nodes with their default values.
    #[serde(default)]
    pub switches: BTreeMap<String, bool>,
    /// Image node ids. Image nodes start empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Layers, bottom first.
    pub layers: Vec<LayerDef>,
}

/// Normalized `[x, y, w, h]` rectangle, origin top-left, in canvas fractions.
///
/// Valid templates keep `x`/`y` within `0..=1` and `w`/`h` within `(0, 1]`.
pub type RectDef = [f64; 4];

/// One composited layer.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerDef {
    /// Flood the canvas with a color node.
    Fill {
        /// Color node id.
        color: String,
        /// Switch node that must be on for the layer to draw.
        #[serde(default)]
        visible_when: Option<String>,
    },
    /// Draw an image node scaled into `rect`.
    Image {
        /// Image node id.
        image: String,
        /// Target rectangle; the whole canvas by default.
        #[serde(default = "full_rect")]
        rect: RectDef,
        /// Switch node that must be on for the layer to draw.
        #[serde(default)]
        visible_when: Option<String>,
    },
    /// Solid plate behind the title text block, sized from the text geometry.
    TitlePlate {
        /// Color node id.
        color: String,
        /// Switch node that must be on for the layer to draw.
        #[serde(default)]
        visible_when: Option<String>,
    },
}

fn full_rect() -> RectDef {
    [0.0, 0.0, 1.0, 1.0]
}

impl LayerDef {
    /// Switch node gating this layer, if any.
    pub fn visible_when(&self) -> Option<&str> {
        match self {
            Self::Fill { visible_when, .. }
            | Self::Image { visible_when, .. }
            | Self::TitlePlate { visible_when, .. } => visible_when.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
struct TemplateError {
    path: String,
    message: String,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl SceneTemplate {
    /// Parse a template from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> ThumbnailResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ThumbnailError::validation(format!("parse scene template JSON: {e}")))
    }

    /// Parse and validate a template file.
    pub fn from_path(path: impl AsRef<Path>) -> ThumbnailResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ThumbnailError::validation(format!("open scene template '{}': {e}", path.display()))
        })?;
        let template = Self::from_reader(BufReader::new(f))?;
        template.validate()?;
        Ok(template)
    }

    /// Framing title layout is computed against: the template's half width and canvas aspect.
    pub fn layout_frame(&self) -> LayoutFrame {
        LayoutFrame {
            ortho_half_width: self.ortho_half_width,
            aspect: self.canvas.aspect(),
        }
    }

    /// Check canvas/framing values and that every layer references declared nodes.
    pub fn validate(&self) -> ThumbnailResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = Canvas::new(self.canvas.width, self.canvas.height) {
            errors.push(TemplateError {
                path: "$.canvas".to_owned(),
                message: e.to_string(),
            });
        }
        if !self.ortho_half_width.is_finite() || self.ortho_half_width <= 0.0 {
            errors.push(TemplateError {
                path: "$.ortho_half_width".to_owned(),
                message: "must be finite and > 0".to_owned(),
            });
        }

        for (i, layer) in self.layers.iter().enumerate() {
            let at = |field: &str| format!("$.layers[{i}].{field}");
            match layer {
                LayerDef::Fill { color, .. } | LayerDef::TitlePlate { color, .. } => {
                    if !self.colors.contains_key(color) {
                        errors.push(TemplateError {
                            path: at("color"),
                            message: format!("unknown color node \"{color}\""),
                        });
                    }
                }
                LayerDef::Image { image, rect, .. } => {
                    if !self.images.contains(image) {
                        errors.push(TemplateError {
                            path: at("image"),
                            message: format!("unknown image node \"{image}\""),
                        });
                    }
                    let [x, y, w, h] = *rect;
                    let unit = 0.0..=1.0;
                    if !(unit.contains(&x) && unit.contains(&y))
                        || !(w > 0.0 && w <= 1.0 && h > 0.0 && h <= 1.0)
                    {
                        errors.push(TemplateError {
                            path: at("rect"),
                            message: "rect must have x, y in [0, 1] and w, h in (0, 1]".to_owned(),
                        });
                    }
                }
            }
            if let Some(switch) = layer.visible_when() {
                if !self.switches.contains_key(switch) {
                    errors.push(TemplateError {
                        path: at("visible_when"),
                        message: format!("unknown switch node \"{switch}\""),
                    });
                }
            }
        }

        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(ThumbnailError::validation(format!(
            "scene template validation failed: {joined}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/template.rs"]
mod tests;
