use std::fmt;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionProgress {
    /// Zero-based index of the current item; 0 when the sequence is empty.
    pub position: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub completed: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Pager caption, e.g. "Vocabulary 2 of 5".
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SessionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No vocabulary");
        }
        write!(f, "Vocabulary {} of {}", self.position + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based() {
        let progress = SessionProgress {
            position: 1,
            total: 5,
            ..SessionProgress::default()
        };
        assert_eq!(progress.label(), "Vocabulary 2 of 5");
    }

    #[test]
    fn empty_progress_has_its_own_label() {
        assert_eq!(SessionProgress::default().label(), "No vocabulary");
    }
}
