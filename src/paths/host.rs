use std::path::{Path, PathBuf};

/// Prefix the scene host uses for "relative to the current working asset".
pub const HOST_RELATIVE_PREFIX: &str = "//";

/// Convert a portable path into the scene host's addressing convention.
///
/// - `/abs/x.png` stays as-is.
/// - `./x.png` drops the leading `.` and becomes `/x.png`.
/// - anything else gets the `//` relative prefix (`x.png` -> `//x.png`, `""` -> `//`).
///
/// Pure and total: no filesystem access.
pub fn translate_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else if let Some(rest) = path.strip_prefix("./") {
        format!("/{rest}")
    } else {
        format!("{HOST_RELATIVE_PREFIX}{path}")
    }
}

/// Resolve a host path string to a filesystem path.
///
/// `//`-prefixed paths are joined onto `working_dir`; everything else is taken literally.
pub fn resolve_host_path(working_dir: &Path, host_path: &str) -> PathBuf {
    match host_path.strip_prefix(HOST_RELATIVE_PREFIX) {
        Some(rel) => working_dir.join(rel),
        None => PathBuf::from(host_path),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paths/host.rs"]
mod tests;
