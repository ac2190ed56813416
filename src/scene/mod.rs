//! The scene renderer capability: the host that owns the scene template, loads images,
//! and writes rendered stills.
//!
//! Thumbnail renderers only ever talk to a scene through [`renderer::SceneRenderer`]. Two
//! implementations ship with the crate: a CPU compositor driven by a JSON scene template, and
//! an in-memory recorder for tests and dry runs.

/// CPU compositor over a [`template::SceneTemplate`].
pub mod cpu;
/// In-memory scene that records every call.
pub mod recording;
/// Scene renderer trait, node ids, and render status.
pub mod renderer;
/// JSON scene template model and validation.
pub mod template;
