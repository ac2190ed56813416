use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    color::domain::SceneColor,
    foundation::core::Position3,
    paths::host::resolve_host_path,
    scene::renderer::{RenderStatus, SceneRenderer},
    text::layout::LayoutFrame,
};

/// One call made against a [`RecordingScene`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneCall {
    /// [`SceneRenderer::set_working_dir`].
    WorkingDir(PathBuf),
    /// [`SceneRenderer::set_scene_image`].
    Image {
        /// Image node id.
        node: String,
        /// Host path string.
        path: String,
    },
    /// [`SceneRenderer::set_scene_color`].
    Color {
        /// Color node id.
        node: String,
        /// Color as passed.
        color: SceneColor,
    },
    /// [`SceneRenderer::set_scene_text`].
    Text {
        /// Text body.
        value: String,
        /// Font size in scene units.
        size: f64,
        /// Text object location.
        position: Position3,
    },
    /// [`SceneRenderer::set_switch`].
    Switch {
        /// Switch node id.
        node: String,
        /// New value.
        on: bool,
    },
    /// [`SceneRenderer::render_to`].
    Render {
        /// Host output path string.
        path: String,
    },
}

/// How a [`RecordingScene`] decides whether an image has data.
#[derive(Clone, Debug)]
pub enum ImageLoadPolicy {
    /// Check the resolved path on disk for a decodable image header.
    Filesystem,
    /// Only these host path strings load.
    Listed(BTreeSet<String>),
}

/// In-memory scene for tests and dry runs.
///
/// Records every call in order and never writes output.
#[derive(Clone, Debug)]
pub struct RecordingScene {
    template_dir: PathBuf,
    working_dir: PathBuf,
    images: ImageLoadPolicy,
    render_status: RenderStatus,
    frame: LayoutFrame,
    calls: Vec<SceneCall>,
}

impl RecordingScene {
    /// Empty recorder whose template directory is `template_dir`. Images are checked on disk.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            working_dir: PathBuf::from("."),
            images: ImageLoadPolicy::Filesystem,
            render_status: RenderStatus::Finished,
            frame: LayoutFrame::default(),
            calls: Vec::new(),
        }
    }

    /// Only the given host paths load; everything else reports no data.
    pub fn with_loadable_images<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = ImageLoadPolicy::Listed(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Status every `render_to` call reports.
    pub fn with_render_status(mut self, status: RenderStatus) -> Self {
        self.render_status = status;
        self
    }

    /// Framing reported by [`SceneRenderer::layout_frame`].
    pub fn with_layout_frame(mut self, frame: LayoutFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> &[SceneCall] {
        &self.calls
    }

    /// Host paths passed to `render_to`, in order.
    pub fn rendered_paths(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SceneCall::Render { path } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Last value set on switch `node`.
    pub fn switch(&self, node: &str) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            SceneCall::Switch { node: n, on } if n == node => Some(*on),
            _ => None,
        })
    }

    /// Last color set on `node`.
    pub fn color(&self, node: &str) -> Option<SceneColor> {
        self.calls.iter().rev().find_map(|c| match c {
            SceneCall::Color { node: n, color } if n == node => Some(*color),
            _ => None,
        })
    }

    /// Forget recorded calls. Working directory and policies are kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn image_has_data(&self, host_path: &str) -> bool {
        match &self.images {
            ImageLoadPolicy::Listed(paths) => paths.contains(host_path),
            ImageLoadPolicy::Filesystem => {
                let path = resolve_host_path(&self.working_dir, host_path);
                path.is_file() && image::image_dimensions(&path).is_ok()
            }
        }
    }
}

impl SceneRenderer for RecordingScene {
    fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn set_working_dir(&mut self, dir: &Path) {
        self.working_dir = dir.to_path_buf();
        self.calls.push(SceneCall::WorkingDir(dir.to_path_buf()));
    }

    fn layout_frame(&self) -> LayoutFrame {
        self.frame
    }

    fn set_scene_image(&mut self, node: &str, host_path: &str) -> bool {
        self.calls.push(SceneCall::Image {
            node: node.to_owned(),
            path: host_path.to_owned(),
        });
        self.image_has_data(host_path)
    }

    fn set_scene_color(&mut self, node: &str, color: SceneColor) {
        self.calls.push(SceneCall::Color {
            node: node.to_owned(),
            color,
        });
    }

    fn set_scene_text(&mut self, value: &str, size: f64, position: Position3) {
        self.calls.push(SceneCall::Text {
            value: value.to_owned(),
            size,
            position,
        });
    }

    fn set_switch(&mut self, node: &str, on: bool) {
        self.calls.push(SceneCall::Switch {
            node: node.to_owned(),
            on,
        });
    }

    fn render_to(&mut self, host_path: &str) -> RenderStatus {
        self.calls.push(SceneCall::Render {
            path: host_path.to_owned(),
        });
        self.render_status
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/recording.rs"]
mod tests;
