use std::{fs::File, io::BufReader, path::Path};

use serde_json::{Map, Value};

use crate::foundation::error::{ThumbnailError, ThumbnailResult};

/// One unit of work: an image name plus the renderer-specific options that came with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// File name, used under both the input and the output directory.
    pub image: String,
    /// Every key of the entry except `image`, passed to the renderer variant as-is.
    pub options: Map<String, Value>,
}

/// A parsed and validated batch manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    /// Directory the entries' input images are read from.
    pub input_directory: String,
    /// Directory rendered thumbnails are written to, under the same file names.
    pub output_directory: String,
    /// Entries in manifest order.
    pub entries: Vec<Entry>,
}

impl Manifest {
    /// Parse and validate a manifest from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ThumbnailResult<Self> {
        let value: Value = serde_json::from_reader(r)
            .map_err(|e| ThumbnailError::validation(format!("parse manifest JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse and validate a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> ThumbnailResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ThumbnailError::validation(format!("open manifest '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate an already parsed JSON value.
    ///
    /// All problems are collected and reported together, each prefixed with its location.
    pub fn from_value(value: Value) -> ThumbnailResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(ThumbnailError::validation(
                "manifest validation failed: $: manifest must be a JSON object",
            ));
        };

        let mut errors = Vec::new();
        let input_directory = take_string(&mut root, "input_directory", "$", &mut errors);
        let output_directory = take_string(&mut root, "output_directory", "$", &mut errors);

        let mut entries = Vec::new();
        match root.remove("entries") {
            None => errors.push("$: missing required field: entries".to_owned()),
            Some(Value::Array(items)) => {
                for (i, item) in items.into_iter().enumerate() {
                    let at = format!("$.entries[{i}]");
                    let Value::Object(mut options) = item else {
                        errors.push(format!("{at}: entry must be a JSON object"));
                        continue;
                    };
                    if let Some(image) = take_string(&mut options, "image", &at, &mut errors) {
                        entries.push(Entry { image, options });
                    }
                }
            }
            Some(_) => errors.push("$.entries: must be an array".to_owned()),
        }

        match (input_directory, output_directory) {
            (Some(input_directory), Some(output_directory)) if errors.is_empty() => Ok(Self {
                input_directory,
                output_directory,
                entries,
            }),
            _ => Err(ThumbnailError::validation(format!(
                "manifest validation failed: {}",
                errors.join("\n")
            ))),
        }
    }

    /// `input_directory/image`.
    pub fn input_file(&self, entry: &Entry) -> String {
        join(&self.input_directory, &entry.image)
    }

    /// `output_directory/image`.
    pub fn output_file(&self, entry: &Entry) -> String {
        join(&self.output_directory, &entry.image)
    }
}

fn join(dir: &str, image: &str) -> String {
    Path::new(dir).join(image).to_string_lossy().into_owned()
}

fn take_string(
    obj: &mut Map<String, Value>,
    key: &str,
    at: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match obj.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(format!("{at}.{key}: must be a string"));
            None
        }
        None => {
            errors.push(format!("{at}: missing required field: {key}"));
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/manifest.rs"]
mod tests;
