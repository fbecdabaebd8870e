//! Split a student's skill list against the master catalog.
//!
//! Recognized entries collapse onto their canonical spelling, so every
//! variant of one master entry yields a single result. Unrecognized entries
//! are kept as typed and deduplicated by exact text: `"algebra"` and
//! `"Algebra"` both survive when neither is in the catalog. The asymmetry is
//! part of the observable report and must not be normalized away.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::SkillKey;
use crate::catalog::model::SkillLookup;
use crate::collation::sort_skills;
use crate::parser::parse_skills;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Skills resolved to catalog entries and skills the catalog does not know.
pub struct PartitionResult {
    pub canonical: Vec<String>,
    pub unknown: Vec<String>,
}

/// Partition parsed (not yet deduplicated) skills against `lookup`.
///
/// Both output lists are sorted with the skill collation.
pub fn partition<S: AsRef<str>>(skills: &[S], lookup: &SkillLookup) -> PartitionResult {
    let mut canonical: Vec<String> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    let mut seen_canonical: HashSet<&str> = HashSet::new();
    let mut seen_unknown: HashSet<&str> = HashSet::new();

    for skill in skills {
        let skill = skill.as_ref();
        let key = SkillKey::of(skill);
        if key.is_empty() {
            continue;
        }
        match lookup.get(&key) {
            Some(canonical_value) => {
                if seen_canonical.insert(canonical_value.as_str()) {
                    canonical.push(canonical_value.clone());
                }
            }
            None => {
                if seen_unknown.insert(skill) {
                    unknown.push(skill.to_string());
                }
            }
        }
    }

    sort_skills(&mut canonical);
    sort_skills(&mut unknown);

    debug!(
        canonical = canonical.len(),
        unknown = unknown.len(),
        "partitioned skills against catalog"
    );
    PartitionResult { canonical, unknown }
}

/// Parse `raw_text` and partition the result against `lookup`.
pub fn partition_text(raw_text: &str, lookup: &SkillLookup) -> PartitionResult {
    partition(&parse_skills(raw_text), lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;

    #[test]
    fn variants_collapse_to_one_canonical_entry() {
        let catalog = build_catalog("Algebra\nGeometry");
        let result = partition_text("Algebra\nalgebra\nALGEBRA", catalog.lookup());
        assert_eq!(result.canonical, vec!["Algebra"]);
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn unknown_entries_dedupe_by_exact_text() {
        let catalog = build_catalog("Geometry");
        let result = partition_text("algebra\nAlgebra\nalgebra\nZ", catalog.lookup());
        assert!(result.canonical.is_empty());
        assert_eq!(result.unknown, vec!["algebra", "Algebra", "Z"]);
    }

    #[test]
    fn outputs_are_sorted() {
        let catalog = build_catalog("Probability, Decimals, Fractions");
        let result = partition_text("probability; zeta; fractions; Alpha", catalog.lookup());
        assert_eq!(result.canonical, vec!["Fractions", "Probability"]);
        assert_eq!(result.unknown, vec!["Alpha", "zeta"]);
    }

    #[test]
    fn every_parsed_skill_lands_in_exactly_one_side() {
        let catalog = build_catalog("Fractions\nDecimals\nMeasurement");
        let raw = "fractions\n- Decimals\nSpelling\n* Reading, fractions; Spelling";
        let parsed = parse_skills(raw);
        let result = partition(&parsed, catalog.lookup());

        for skill in &parsed {
            let in_canonical = catalog
                .resolve(skill)
                .is_some_and(|canon| result.canonical.iter().any(|c| c == canon));
            let in_unknown = result.unknown.contains(skill);
            assert!(in_canonical ^ in_unknown, "{skill} must be on exactly one side");
        }
        for skill in &result.canonical {
            assert!(catalog.list().contains(skill));
        }
    }

    #[test]
    fn empty_lookup_makes_everything_unknown() {
        let lookup = SkillLookup::new();
        let result = partition(&["X", " x "], &lookup);
        assert!(result.canonical.is_empty());
        assert_eq!(result.unknown, vec!["X", " x "]);
    }
}
