//! Repetition section - finds runs of identical characters and prices breaking them.

use crate::policy::MAX_REPEAT;

/// Every `BREAK_SPAN` characters of a run need one replacement.
const BREAK_SPAN: usize = MAX_REPEAT + 1;

/// Maximal runs longer than [`MAX_REPEAT`], by length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatRuns {
    lengths: Vec<usize>,
}

impl RepeatRuns {
    #[cfg(test)]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Replacements needed to break every run when no character is deleted.
    pub fn replacements(&self) -> usize {
        self.lengths.iter().map(|&len| len / BREAK_SPAN).sum()
    }

    /// Runs where a single deletion saves one replacement (`len % 3 == 0`).
    pub fn one_mod(&self) -> usize {
        self.bucket(0)
    }

    /// Runs where two deletions save one replacement (`len % 3 == 1`).
    pub fn two_mod(&self) -> usize {
        self.bucket(1)
    }

    fn bucket(&self, rem: usize) -> usize {
        self.lengths
            .iter()
            .filter(|&&len| len % BREAK_SPAN == rem)
            .count()
    }

    /// Replacements still needed after `excess` forced deletions are spent
    /// where they save the most.
    ///
    /// Deletions go first to `one_mod` runs (1 deletion per saved replacement),
    /// then to `two_mod` runs (2 per saved replacement), and the rest at the
    /// generic rate of 3 per saved replacement.
    pub fn replacements_after_deleting(&self, excess: usize) -> usize {
        let one_mod = self.one_mod();
        let two_mod = self.two_mod();

        let saved_single = excess.min(one_mod);
        let saved_double = excess.saturating_sub(one_mod).min(two_mod * 2) / 2;
        let saved_generic = excess.saturating_sub(one_mod + 2 * two_mod) / BREAK_SPAN;

        self.replacements().saturating_sub(saved_single + saved_double + saved_generic)
    }

    pub fn reason(&self) -> Option<String> {
        if self.lengths.is_empty() {
            return None;
        }
        Some("Password contains repetitive patterns".to_string())
    }
}

/// Collects every maximal run of identical characters longer than [`MAX_REPEAT`].
pub fn repeat_section(chars: &[char]) -> RepeatRuns {
    let lengths = chars
        .chunk_by(|a, b| a == b)
        .map(<[char]>::len)
        .filter(|&len| len > MAX_REPEAT)
        .collect();
    RepeatRuns { lengths }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pwd: &str) -> RepeatRuns {
        let chars: Vec<char> = pwd.chars().collect();
        repeat_section(&chars)
    }

    #[test]
    fn test_repeat_section_no_runs() {
        let r = runs("aabbaabb");
        assert!(r.lengths().is_empty());
        assert_eq!(r.replacements(), 0);
        assert_eq!(r.reason(), None);
    }

    #[test]
    fn test_repeat_section_maximal_runs() {
        let r = runs("Baaabb0");
        assert_eq!(r.lengths(), &[3]);
        assert_eq!(r.replacements(), 1);

        let r = runs("bbaaaaaaaaaaaaaaacccccc");
        assert_eq!(r.lengths(), &[15, 6]);
        assert_eq!(r.replacements(), 7);
        assert!(r.reason().is_some());
    }

    #[test]
    fn test_repeat_section_run_at_end() {
        let r = runs("xyz1111");
        assert_eq!(r.lengths(), &[4]);
    }

    #[test]
    fn test_repeat_section_buckets() {
        // lengths 3, 4, 5, 6, 7
        let r = runs("aaaBBBB11111cccccc2222222");
        assert_eq!(r.one_mod(), 2);
        assert_eq!(r.two_mod(), 2);
        assert_eq!(r.replacements(), 1 + 1 + 1 + 2 + 2);
    }

    #[test]
    fn test_replacements_after_deleting_single_run() {
        // 25 identical chars: 8 replacements, len % 3 == 1
        let r = runs(&"a".repeat(25));
        assert_eq!(r.replacements(), 8);
        assert_eq!(r.replacements_after_deleting(5), 6);
    }

    #[test]
    fn test_replacements_after_deleting_prefers_one_mod() {
        let r = runs("bbaaaaaaaaaaaaaaacccccc");
        assert_eq!(r.replacements_after_deleting(1), 6);
        assert_eq!(r.replacements_after_deleting(2), 5);
        assert_eq!(r.replacements_after_deleting(3), 5);
    }

    #[test]
    fn test_replacements_after_deleting_saturates() {
        let r = runs("aaa");
        assert_eq!(r.replacements_after_deleting(30), 0);
        assert_eq!(RepeatRuns::default().replacements_after_deleting(4), 0);
    }
}
