use serde::{Deserialize, Serialize};

use crate::foundation::core::Position3;

/// Camera orthographic half width, in scene units.
pub const ORTHO_HALF_WIDTH: f64 = 5.0;
/// Output aspect (height over width) the scene is framed for.
pub const CANVAS_ASPECT: f64 = 720.0 / 1280.0;
/// Margin from the canvas edge as a fraction of the half width.
pub const EDGE_OFFSET_RATIO: f64 = 0.02;
/// Font size used by [`LayoutMode::Fixed`], in scene units.
pub const NOMINAL_TEXT_SIZE: f64 = 0.5;
/// Rendered glyph ascent as a fraction of nominal font size.
///
/// Measured by hand at nominal size 1.0 for the title font; re-measure if the font changes.
pub const ASCENT_RATIO: f64 = 0.5627;
/// Single-line rendered height as a fraction of the full canvas height.
pub const LINE_HEIGHT_FRACTION: f64 = 13.0 / 90.0;

/// How the title's font size and vertical position are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Constant nominal size, top-aligned below the canvas edge.
    #[default]
    Fixed,
    /// Size derived from the line count, block centered vertically.
    #[serde(rename = "auto")]
    AutoScale,
}

/// Orthographic framing the layout is computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutFrame {
    /// Camera orthographic half width, in scene units.
    pub ortho_half_width: f64,
    /// Canvas height over width.
    pub aspect: f64,
}

impl LayoutFrame {
    /// Visible half height, in scene units.
    pub fn half_height(self) -> f64 {
        self.ortho_half_width * self.aspect
    }

    /// Margin kept from the canvas edge, in scene units.
    pub fn edge_offset(self) -> f64 {
        EDGE_OFFSET_RATIO * self.ortho_half_width
    }
}

impl Default for LayoutFrame {
    fn default() -> Self {
        Self {
            ortho_half_width: ORTHO_HALF_WIDTH,
            aspect: CANVAS_ASPECT,
        }
    }
}

/// Computed title geometry, ready to hand to the scene's text object.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// Uppercased title body.
    pub body: String,
    /// Font size, in scene units.
    pub font_size: f64,
    /// Text object's vertical location, in scene units from the canvas center.
    pub vertical_offset: f64,
    /// `0.5` when the title spans several lines, else `1.0`. Always `1.0` in fixed mode.
    pub multiline_scaling_factor: f64,
    /// Number of `\n` characters in the title.
    pub newline_count: usize,
}

impl TextLayout {
    /// Text object location: horizontally centered, at `vertical_offset`.
    pub fn position(&self) -> Position3 {
        Position3::new(0.0, self.vertical_offset, 0.0)
    }
}

/// Lay out `title_text` with the default framing.
pub fn layout_title(title_text: &str, mode: LayoutMode) -> TextLayout {
    layout_title_in(title_text, mode, LayoutFrame::default())
}

/// Lay out `title_text` against an explicit framing.
pub fn layout_title_in(title_text: &str, mode: LayoutMode, frame: LayoutFrame) -> TextLayout {
    let newline_count = title_text.matches('\n').count();
    let body = title_text.to_uppercase();

    match mode {
        LayoutMode::Fixed => {
            let ascent = NOMINAL_TEXT_SIZE * ASCENT_RATIO;
            TextLayout {
                body,
                font_size: NOMINAL_TEXT_SIZE,
                vertical_offset: frame.half_height() - frame.edge_offset() - ascent,
                multiline_scaling_factor: 1.0,
                newline_count,
            }
        }
        LayoutMode::AutoScale => {
            let base_line_height = LINE_HEIGHT_FRACTION * (2.0 * frame.half_height());
            let multiline_scaling_factor = if newline_count > 0 { 0.5 } else { 1.0 };
            let font_size = base_line_height * multiline_scaling_factor / ASCENT_RATIO;
            TextLayout {
                body,
                font_size,
                vertical_offset: newline_count as f64 * font_size / 2.0,
                multiline_scaling_factor,
                newline_count,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
