//! Coverage accounting between the master catalog and a student's results.
//!
//! Helpers here derive the recommended list (catalog entries the student has
//! neither passed nor attempted) and the percentage counters shown next to
//! it. An empty catalog yields 0% everywhere rather than a division by zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::SkillKey;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Derived metrics over the passed/failed canonical sets.
pub struct CoverageSummary {
    pub recommended: Vec<String>,
    pub attempted_count: usize,
    pub coverage: u32,
    pub remaining_gap_percent: u32,
}

/// Aggregate canonical results against the sorted master list.
///
/// `recommended` keeps master-list order. Membership is decided by
/// normalized key so callers may pass either canonical or raw spellings.
pub fn aggregate<M, P, F>(master: &[M], passed: &[P], failed: &[F]) -> CoverageSummary
where
    M: AsRef<str>,
    P: AsRef<str>,
    F: AsRef<str>,
{
    let taken: BTreeSet<SkillKey> = passed
        .iter()
        .map(|skill| SkillKey::of(skill.as_ref()))
        .chain(failed.iter().map(|skill| SkillKey::of(skill.as_ref())))
        .collect();

    let recommended: Vec<String> = master
        .iter()
        .map(|skill| skill.as_ref())
        .filter(|skill| !taken.contains(&SkillKey::of(skill)))
        .map(str::to_string)
        .collect();

    CoverageSummary {
        attempted_count: taken.len(),
        coverage: percent(passed.len(), master.len()),
        remaining_gap_percent: percent(recommended.len(), master.len()),
        recommended,
    }
}

/// `part / whole` as a whole percentage, rounding halves up; 0 when `whole`
/// is zero.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let ratio = part as f64 / whole as f64 * 100.0;
    ratio.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_excludes_passed_and_failed() {
        let master = ["Decimals", "Fractions", "Measurement", "Probability"];
        let summary = aggregate(&master, &["Fractions"], &["probability"]);
        assert_eq!(summary.recommended, vec!["Decimals", "Measurement"]);
        assert_eq!(summary.attempted_count, 2);
        assert_eq!(summary.coverage, 25);
        assert_eq!(summary.remaining_gap_percent, 50);
    }

    #[test]
    fn attempted_counts_union_of_keys() {
        let master = ["A", "B", "C"];
        let summary = aggregate(&master, &["A", "B"], &["b", "C"]);
        assert_eq!(summary.attempted_count, 3);
        assert!(summary.recommended.is_empty());
        assert_eq!(summary.remaining_gap_percent, 0);
    }

    #[test]
    fn empty_master_is_zero_percent() {
        let master: [&str; 0] = [];
        let summary = aggregate(&master, &["X"], &[] as &[&str]);
        assert_eq!(summary.coverage, 0);
        assert_eq!(summary.remaining_gap_percent, 0);
        assert!(summary.recommended.is_empty());
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(0, 5), 0);
        assert_eq!(percent(5, 5), 100);
    }
}
