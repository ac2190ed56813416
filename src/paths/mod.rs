//! Portable path strings versus the scene host's `//`-relative addressing.

/// Translation into (and resolution out of) host path strings.
pub mod host;
