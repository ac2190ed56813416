use std::fmt;

/// Result of rendering one manifest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Entry image name.
    pub image: String,
    /// Whether the entry rendered.
    pub succeeded: bool,
    /// Display text of the entry's error, if it failed.
    pub error: Option<String>,
}

impl RenderOutcome {
    /// A rendered entry.
    pub fn success(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            succeeded: true,
            error: None,
        }
    }

    /// A failed entry with its error text.
    pub fn failure(image: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            succeeded: false,
            error: Some(error.into()),
        }
    }
}

/// Per-entry status line: `Success: a.png` or `Failure for a.png: <error>`.
impl fmt::Display for RenderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "Success: {}", self.image),
            Some(error) => write!(f, "Failure for {}: {}", self.image, error),
        }
    }
}

/// Outcomes of a whole batch, in manifest order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// One outcome per entry.
    pub outcomes: Vec<RenderOutcome>,
}

impl BatchReport {
    /// Number of entries that rendered.
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// Image names of failed entries, in manifest order.
    pub fn failed_images(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| o.image.clone())
            .collect()
    }

    /// Whether every entry rendered.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.succeeded)
    }
}

/// Summary block printed after the last entry.
impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed_images();
        writeln!(
            f,
            "Done. Succeeded: {}. Failed: {}.",
            self.succeeded_count(),
            failed.len()
        )?;
        if failed.is_empty() {
            return writeln!(f, "OK");
        }
        let noun = if failed.len() == 1 { "image" } else { "images" };
        writeln!(f, "The following {} failed to render:", noun)?;
        for image in &failed {
            writeln!(f, " - {image}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/report.rs"]
mod tests;
