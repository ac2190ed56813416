use std::path::Path;

use crate::{color::domain::SceneColor, foundation::core::Position3, text::layout::LayoutFrame};

/// Image node holding the entry's input image.
pub const INPUT_IMAGE_NODE: &str = "InputImage";
/// Color node tinted with the entry's domain color.
pub const DOMAIN_COLOR_NODE: &str = "DomainColor";
/// Switch telling the scene whether the input image loaded.
pub const IMAGE_EXISTS_SWITCH: &str = "ImageExists";
/// Switch telling the scene whether there is title text.
pub const TEXT_EXISTS_SWITCH: &str = "TextExists";

/// Completion status reported by [`SceneRenderer::render_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// The still was written.
    Finished,
    /// Rendering stopped before writing the still.
    Failed,
}

impl RenderStatus {
    /// Whether this is [`RenderStatus::Finished`].
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// A scene host that thumbnail renderers configure and then ask to render.
///
/// Paths passed in are host path strings (see [`crate::translate_path`]): `//`-prefixed paths
/// are relative to [`SceneRenderer::working_dir`].
///
/// The working directory is state of the scene renderer, not of the process. Switching it is
/// not undone after a render; every render that wants the template directory sets it again.
pub trait SceneRenderer {
    /// Directory containing the scene template.
    fn template_dir(&self) -> &Path;

    /// Base directory for `//`-relative host paths.
    fn working_dir(&self) -> &Path;

    /// Replace the base directory for `//`-relative host paths.
    fn set_working_dir(&mut self, dir: &Path);

    /// Framing the scene's camera uses; title text is laid out against it.
    fn layout_frame(&self) -> LayoutFrame {
        LayoutFrame::default()
    }

    /// Point an image node at `host_path`. Returns whether the image has data.
    fn set_scene_image(&mut self, node: &str, host_path: &str) -> bool;

    /// Set a color node.
    fn set_scene_color(&mut self, node: &str, color: SceneColor);

    /// Set the title text body, font size (scene units), and location.
    fn set_scene_text(&mut self, value: &str, size: f64, position: Position3);

    /// Set a boolean switch node.
    fn set_switch(&mut self, node: &str, on: bool);

    /// Render the configured scene to `host_path`, blocking until done.
    fn render_to(&mut self, host_path: &str) -> RenderStatus;
}
