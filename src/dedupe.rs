//! First-occurrence deduplication by normalized key.

use std::collections::HashSet;

use crate::normalize::{normalize_key, trim_skill};

/// Keep the first spelling of each skill, in input order.
///
/// Entries whose key is empty are dropped. The kept entry is the trimmed
/// original text, so display casing comes from whichever spelling appeared
/// first.
pub fn dedupe<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for skill in skills {
        let skill = skill.as_ref();
        let key = normalize_key(skill);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        result.push(trim_skill(skill).to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_spelling() {
        let skills = ["Fractions", "fractions", "FRACTIONS ", "Decimals"];
        assert_eq!(dedupe(&skills), vec!["Fractions", "Decimals"]);
    }

    #[test]
    fn collapsed_whitespace_counts_as_duplicate() {
        let skills = ["  Word  Problems", "word problems"];
        assert_eq!(dedupe(&skills), vec!["Word  Problems"]);
    }

    #[test]
    fn drops_blank_entries() {
        let skills = ["", "   ", "Probability"];
        assert_eq!(dedupe(&skills), vec!["Probability"]);
    }

    #[test]
    fn is_idempotent() {
        let inputs: [&[&str]; 3] = [
            &["b", "B", "a", " a ", "c\tc", "C C"],
            &[],
            &["Geometry: Angles", "geometry:  angles", "Geometry: Shapes"],
        ];
        for input in inputs {
            let once = dedupe(input);
            assert_eq!(dedupe(&once), once, "{input:?}");
        }
    }
}
