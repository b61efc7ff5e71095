mod expected;
mod point;

pub use expected::parse_expected_point;
pub use point::{MatchResult, verify};
