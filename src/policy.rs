//! Strong password policy
//!
//! Holds the fixed rules every evaluation is measured against and a direct
//! predicate telling whether a password already satisfies them.

/// Minimum number of characters.
pub const MIN_LENGTH: usize = 6;

/// Maximum number of characters.
pub const MAX_LENGTH: usize = 20;

/// Longest allowed run of identical consecutive characters.
pub const MAX_REPEAT: usize = 2;

/// Number of required character classes (lowercase, uppercase, digit).
pub const REQUIRED_CLASSES: usize = 3;

/// Classification of a single character.
///
/// Only the first three variants count toward coverage; everything else
/// (punctuation, spaces, titlecase letters) is `Other` and contributes to
/// length only. Digits include non-ASCII numerals such as `٣` or `１`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Returns `true` if the password satisfies the whole policy.
///
/// Checks length bounds, presence of each required class and the absence of
/// any run longer than [`MAX_REPEAT`].
pub fn is_strong(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&chars.len()) {
        return false;
    }

    let has = |class: CharClass| chars.iter().any(|&c| CharClass::of(c) == class);
    if !(has(CharClass::Lower) && has(CharClass::Upper) && has(CharClass::Digit)) {
        return false;
    }

    !chars
        .windows(MAX_REPEAT + 1)
        .any(|w| w.iter().all(|&c| c == w[0]))
}
