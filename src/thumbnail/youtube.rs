use serde::Deserialize;

use crate::{
    foundation::error::{ThumbnailError, ThumbnailResult},
    scene::renderer::{IMAGE_EXISTS_SWITCH, INPUT_IMAGE_NODE, SceneRenderer, TEXT_EXISTS_SWITCH},
    text::layout::{LayoutMode, layout_title_in},
    thumbnail::contract::{ThumbnailRenderer, load_image},
};

/// Entry options accepted by [`YouTubeRenderer`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YouTubeOptions {
    /// When `false`, an image that fails to load only turns the image-exists switch off.
    pub has_image: bool,
    /// Title, uppercased before display. Empty turns the text-exists switch off.
    pub title_text: String,
    /// Font size and placement policy.
    pub text_layout: LayoutMode,
}

impl Default for YouTubeOptions {
    fn default() -> Self {
        Self {
            has_image: true,
            title_text: String::new(),
            text_layout: LayoutMode::Fixed,
        }
    }
}

/// Video thumbnail: uppercased title text, optional input image.
#[derive(Clone, Debug)]
pub struct YouTubeRenderer {
    input_image: String,
    options: YouTubeOptions,
}

impl YouTubeRenderer {
    /// Renderer for `input_image` (a portable path).
    pub fn new(input_image: impl Into<String>, options: YouTubeOptions) -> Self {
        Self {
            input_image: input_image.into(),
            options,
        }
    }
}

impl ThumbnailRenderer for YouTubeRenderer {
    fn set_up(&self, scene: &mut dyn SceneRenderer) -> ThumbnailResult<()> {
        let title = &self.options.title_text;
        let layout = layout_title_in(title, self.options.text_layout, scene.layout_frame());
        tracing::debug!(
            font_size = layout.font_size,
            vertical_offset = layout.vertical_offset,
            "title layout"
        );
        scene.set_scene_text(&layout.body, layout.font_size, layout.position());
        scene.set_switch(TEXT_EXISTS_SWITCH, !title.is_empty());

        let image_valid = load_image(scene, INPUT_IMAGE_NODE, &self.input_image);
        scene.set_switch(IMAGE_EXISTS_SWITCH, image_valid);
        if self.options.has_image && !image_valid {
            return Err(ThumbnailError::ImageLoad);
        }
        Ok(())
    }
}
