//! Length section - measures how far the password is from the allowed length range.

use crate::policy::{MAX_LENGTH, MIN_LENGTH};

/// Distance between a password length and the allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthGap {
    /// Characters missing to reach [`MIN_LENGTH`].
    TooShort(usize),
    Within,
    /// Characters in excess of [`MAX_LENGTH`].
    TooLong(usize),
}

impl LengthGap {
    pub fn reason(&self) -> Option<String> {
        match self {
            LengthGap::TooShort(_) => Some(format!(
                "Password must be at least {} characters",
                MIN_LENGTH
            )),
            LengthGap::TooLong(_) => Some(format!(
                "Password must be at most {} characters",
                MAX_LENGTH
            )),
            LengthGap::Within => None,
        }
    }
}

/// Classifies a password length (in characters) against the policy bounds.
pub fn length_section(len: usize) -> LengthGap {
    if len < MIN_LENGTH {
        LengthGap::TooShort(MIN_LENGTH - len)
    } else if len > MAX_LENGTH {
        LengthGap::TooLong(len - MAX_LENGTH)
    } else {
        LengthGap::Within
    }
}
