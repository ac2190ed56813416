use serde::Deserialize;

use crate::{
    foundation::error::ThumbnailResult,
    paths::host::translate_path,
    scene::renderer::{IMAGE_EXISTS_SWITCH, INPUT_IMAGE_NODE, SceneRenderer, TEXT_EXISTS_SWITCH},
    text::layout::{LayoutMode, layout_title_in},
    thumbnail::contract::{ThumbnailRenderer, load_image},
};

/// Entry options accepted by [`TitleCardRenderer`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleCardOptions {
    /// Whether to use the entry's input image at all.
    pub has_image: bool,
    /// Title, uppercased before display.
    pub title_text: String,
}

/// Title card from the single-scene batch: text and image are both optional, and an image
/// that fails to load only turns the image-exists switch off. Only an incomplete render fails.
#[derive(Clone, Debug)]
pub struct TitleCardRenderer {
    input_image: String,
    options: TitleCardOptions,
}

impl TitleCardRenderer {
    /// Renderer for `input_image` (a portable path).
    pub fn new(input_image: impl Into<String>, options: TitleCardOptions) -> Self {
        Self {
            input_image: input_image.into(),
            options,
        }
    }
}

impl ThumbnailRenderer for TitleCardRenderer {
    fn set_up(&self, scene: &mut dyn SceneRenderer) -> ThumbnailResult<()> {
        let title = &self.options.title_text;
        let layout = layout_title_in(title, LayoutMode::Fixed, scene.layout_frame());
        scene.set_scene_text(&layout.body, layout.font_size, layout.position());

        // The node is always reset; otherwise the previous entry's image stays loaded.
        let image_valid = if self.options.has_image {
            load_image(scene, INPUT_IMAGE_NODE, &self.input_image)
        } else {
            scene.set_scene_image(INPUT_IMAGE_NODE, &translate_path(""))
        };

        scene.set_switch(TEXT_EXISTS_SWITCH, !title.is_empty());
        scene.set_switch(IMAGE_EXISTS_SWITCH, image_valid);
        Ok(())
    }
}
