//! Character variety section - checks for lowercase, uppercase and digits.

use crate::policy::{CharClass, REQUIRED_CLASSES};

/// Which required character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
}

impl Coverage {
    /// Number of required classes absent from the password, in `0..=3`.
    pub fn missing(&self) -> usize {
        let present = [self.has_lower, self.has_upper, self.has_digit]
            .iter()
            .filter(|&&b| b)
            .count();
        REQUIRED_CLASSES - present
    }

    pub fn reason(&self) -> Option<String> {
        let missing: Vec<_> = vec![
            if !self.has_lower { Some("lowercase") } else { None },
            if !self.has_upper { Some("uppercase") } else { None },
            if !self.has_digit { Some("numbers") } else { None },
        ]
        .into_iter()
        .flatten()
        .collect();

        if missing.is_empty() {
            return None;
        }
        Some(format!("Missing: {}", missing.join(", ")))
    }
}

/// Scans the password once and records which required classes it contains.
pub fn variety_section(chars: &[char]) -> Coverage {
    chars.iter().fold(Coverage::default(), |mut coverage, &c| {
        match CharClass::of(c) {
            CharClass::Lower => coverage.has_lower = true,
            CharClass::Upper => coverage.has_upper = true,
            CharClass::Digit => coverage.has_digit = true,
            CharClass::Other => {}
        }
        coverage
    })
}
