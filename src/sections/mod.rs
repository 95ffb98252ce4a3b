//! Password policy sections
//!
//! Each section measures one independent constraint of the policy.

mod length;
mod repeat;
mod variety;

pub use length::{length_section, LengthGap};
pub use repeat::{repeat_section, RepeatRuns};
pub use variety::{variety_section, Coverage};
