//! Progress reporting for conversions

/// Stage of a running conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Loading and parsing the input file.
    ReadingSource,
    /// Serializing and writing the output file.
    WritingOutput,
    /// Output written successfully.
    Complete,
}

impl ConvertPhase {
    /// Get display name for UI
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ConvertPhase::ReadingSource => "Reading",
            ConvertPhase::WritingOutput => "Writing",
            ConvertPhase::Complete => "Complete",
        }
    }
}

/// A progress update handed to a [`ConvertProgressCallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertProgress {
    pub phase: ConvertPhase,
    /// 1-based step number.
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ConvertProgress {
    pub fn new(phase: ConvertPhase, current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            message: message.into(),
        }
    }

    /// Fraction of steps finished, in `0.0..=1.0`
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.current as f32 / self.total as f32).min(1.0)
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert!((ConvertProgress::new(ConvertPhase::ReadingSource, 1, 2, "").fraction() - 0.5).abs() < f32::EPSILON);
        assert!((ConvertProgress::new(ConvertPhase::Complete, 0, 0, "").fraction() - 1.0).abs() < f32::EPSILON);
    }
}
