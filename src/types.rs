//! Evaluation report types.

/// Outcome of a detailed password evaluation.
///
/// `steps` is the minimum number of single-character edits that make the
/// password strong; the three counters break it down by edit kind and always
/// sum to `steps`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordCheck {
    pub steps: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// Replacements, including those that only supply a missing character class.
    pub replacements: usize,
    /// Violated rules, in evaluation order. Empty iff the password is strong.
    pub reasons: Vec<String>,
}

impl PasswordCheck {
    pub fn is_strong(&self) -> bool {
        self.steps == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strong() {
        assert!(PasswordCheck::default().is_strong());
    }

    #[test]
    fn test_nonzero_steps_is_not_strong() {
        let check = PasswordCheck {
            steps: 2,
            insertions: 1,
            replacements: 1,
            ..Default::default()
        };
        assert!(!check.is_strong());
    }
}
