use crate::crypto::Point;
use num_bigint::BigUint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    Mismatch,
}

impl MatchResult {
    pub fn status_symbol(&self) -> &'static str {
        match self {
            MatchResult::Match => "✓",
            MatchResult::Mismatch => "✗",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// Compare the computed point, read as a big-endian integer, with the
/// recorded value for `seed`.
pub fn verify(_seed: &str, computed: &Point, expected: &BigUint) -> MatchResult {
    if computed.to_biguint() == *expected {
        MatchResult::Match
    } else {
        MatchResult::Mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{ClampedBaseMul, Ed25519KeyExpansion, derive_point, derive_scalar};
    use crate::points::default_entries;

    #[test]
    fn test_known_seeds_match() {
        for entry in default_entries() {
            let seed = entry.seed.to_str().unwrap();
            let point = derive_point(&Ed25519KeyExpansion, &derive_scalar(seed)).unwrap();
            assert_eq!(verify(seed, &point, &entry.expected), MatchResult::Match);
        }
    }

    #[test]
    fn test_wrong_expected_is_mismatch() {
        let point = derive_point(&Ed25519KeyExpansion, &derive_scalar("croc1")).unwrap();
        let wrong = point.to_biguint() + 1u8;
        let result = verify("croc1", &point, &wrong);
        assert_eq!(result, MatchResult::Mismatch);
        assert!(!result.is_match());
        assert_eq!(result.status_symbol(), "✗");
    }

    #[test]
    fn test_other_mapping_does_not_reproduce_constants() {
        for entry in default_entries() {
            let seed = entry.seed.to_str().unwrap();
            let point = derive_point(&ClampedBaseMul, &derive_scalar(seed)).unwrap();
            assert_eq!(verify(seed, &point, &entry.expected), MatchResult::Mismatch);
        }
    }
}
