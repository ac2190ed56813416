//! Title text geometry for the scene's text object.

/// Font size and placement policies.
pub mod layout;
