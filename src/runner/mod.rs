use crate::crypto::{self, ClampedScalar, CurveOps, Error, Point};
use crate::points::SeedEntry;
use crate::validation::{MatchResult, verify};
use num_bigint::BigUint;

/// Everything derived for one seed
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub seed: String,
    pub scalar: ClampedScalar,
    pub point: Point,
    pub expected: BigUint,
    pub result: MatchResult,
}

/// Report or error for one seed, in declaration order
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    pub seed: String,
    pub report: crypto::Result<SeedReport>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub matches: usize,
    pub mismatches: usize,
    pub errors: usize,
}

impl RunStats {
    pub fn from_outcomes(outcomes: &[SeedOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            match &outcome.report {
                Ok(report) if report.result.is_match() => stats.matches += 1,
                Ok(_) => stats.mismatches += 1,
                Err(_) => stats.errors += 1,
            }
        }
        stats
    }
}

/// Derive, map and verify a single entry.
pub fn process_entry<C: CurveOps + ?Sized>(
    entry: &SeedEntry,
    curve: &C,
    rounds: u32,
) -> crypto::Result<SeedReport> {
    let seed = entry.seed.to_str().ok_or(Error::EncodingError)?;
    let scalar = crypto::derive_scalar_with_rounds(seed, rounds);
    let point = crypto::derive_point(curve, &scalar)?;
    let result = verify(seed, &point, &entry.expected);

    Ok(SeedReport {
        seed: seed.to_string(),
        scalar,
        point,
        expected: entry.expected.clone(),
        result,
    })
}

/// Process every entry in order. A failing seed does not stop the others.
pub fn run_pipeline<C: CurveOps + ?Sized>(
    entries: &[SeedEntry],
    curve: &C,
    rounds: u32,
) -> Vec<SeedOutcome> {
    entries
        .iter()
        .map(|entry| SeedOutcome {
            seed: entry.display_seed(),
            report: process_entry(entry, curve, rounds),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{ClampedBaseMul, Ed25519KeyExpansion, HASH_ROUNDS};
    use crate::points::default_entries;

    #[cfg(unix)]
    fn non_utf8_seed() -> std::ffi::OsString {
        use std::os::unix::ffi::OsStringExt;
        std::ffi::OsString::from_vec(vec![b'c', 0xff, b'1'])
    }

    /// Refuses every scalar, to exercise the error path
    struct RejectingCurve;

    impl CurveOps for RejectingCurve {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        fn scalar_to_compressed_point(&self, _scalar: &ClampedScalar) -> crypto::Result<[u8; 32]> {
            Err(Error::InvalidScalar)
        }
    }

    /// Returns an encoding that is not on the curve
    struct BrokenEncodingCurve;

    impl CurveOps for BrokenEncodingCurve {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn scalar_to_compressed_point(&self, _scalar: &ClampedScalar) -> crypto::Result<[u8; 32]> {
            let mut bytes = [0u8; 32];
            bytes[0] = 2;
            Ok(bytes)
        }
    }

    #[test]
    fn test_default_run_matches() {
        let outcomes = run_pipeline(&default_entries(), &Ed25519KeyExpansion, HASH_ROUNDS);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].seed, "croc1");
        assert_eq!(outcomes[1].seed, "croc2");

        for outcome in &outcomes {
            let report = outcome.report.as_ref().unwrap();
            assert_eq!(report.result, MatchResult::Match);
            assert!(report.scalar.is_clamped());
        }

        assert_eq!(
            RunStats::from_outcomes(&outcomes),
            RunStats { matches: 2, mismatches: 0, errors: 0 }
        );
    }

    #[test]
    fn test_mismatch_is_reported_not_error() {
        let entries = vec![SeedEntry::new("croc1", BigUint::from(12345u32))];
        let outcomes = run_pipeline(&entries, &Ed25519KeyExpansion, HASH_ROUNDS);
        let report = outcomes[0].report.as_ref().unwrap();
        assert_eq!(report.result, MatchResult::Mismatch);
        assert_eq!(report.expected, BigUint::from(12345u32));
    }

    #[test]
    fn test_other_mapping_mismatches_recorded_points() {
        let outcomes = run_pipeline(&default_entries(), &ClampedBaseMul, HASH_ROUNDS);
        assert_eq!(
            RunStats::from_outcomes(&outcomes),
            RunStats { matches: 0, mismatches: 2, errors: 0 }
        );
    }

    #[test]
    fn test_round_count_is_applied() {
        let entries = default_entries();
        let outcomes = run_pipeline(&entries, &Ed25519KeyExpansion, 1);
        for outcome in &outcomes {
            assert_eq!(outcome.report.as_ref().unwrap().result, MatchResult::Mismatch);
        }
    }

    #[test]
    fn test_errors_are_local_to_a_seed() {
        let outcomes = run_pipeline(&default_entries(), &RejectingCurve, HASH_ROUNDS);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.report.as_ref().unwrap_err() == &Error::InvalidScalar));

        let outcomes = run_pipeline(&default_entries(), &BrokenEncodingCurve, HASH_ROUNDS);
        assert!(outcomes.iter().all(|o| o.report.as_ref().unwrap_err() == &Error::InvalidPoint));
        assert_eq!(RunStats::from_outcomes(&outcomes).errors, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_seed_does_not_stop_others() {
        let mut entries = vec![SeedEntry::new(non_utf8_seed(), BigUint::from(0u8))];
        entries.extend(default_entries());

        let outcomes = run_pipeline(&entries, &Ed25519KeyExpansion, HASH_ROUNDS);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].report.as_ref().unwrap_err(), &Error::EncodingError);
        assert_eq!(outcomes[0].seed, "c\u{fffd}1");
        assert!(outcomes[1].report.is_ok());
        assert!(outcomes[2].report.is_ok());

        assert_eq!(
            RunStats::from_outcomes(&outcomes),
            RunStats { matches: 2, mismatches: 0, errors: 1 }
        );
    }

    #[test]
    fn test_empty_seed_processes() {
        let entries = vec![SeedEntry::new("", BigUint::from(0u8))];
        let outcomes = run_pipeline(&entries, &Ed25519KeyExpansion, HASH_ROUNDS);
        let report = outcomes[0].report.as_ref().unwrap();
        assert!(report.scalar.is_clamped());
        assert_eq!(report.result, MatchResult::Mismatch);
    }
}
