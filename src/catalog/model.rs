//! Sorted master list plus its key index.

use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::identity::SkillKey;
use crate::collation::sort_skills;
use crate::dedupe::dedupe;
use crate::parser::parse_skills;

/// Normalized key to canonical (master-list) spelling.
pub type SkillLookup = BTreeMap<SkillKey, String>;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// The master catalog: unique entries in collation order and a key index.
pub struct SkillCatalog {
    list: Vec<String>,
    lookup: SkillLookup,
}

impl SkillCatalog {
    /// Parse, dedupe, and sort the master text, then index it by key.
    pub fn build(master_text: &str) -> Self {
        Self::from_skills(&parse_skills(master_text))
    }

    /// Build from an already-parsed master list.
    pub fn from_skills<S: AsRef<str>>(skills: &[S]) -> Self {
        let mut list = dedupe(skills);
        sort_skills(&mut list);

        let lookup: SkillLookup = list
            .iter()
            .map(|skill| (SkillKey::of(skill), skill.clone()))
            .collect();

        debug!(entries = list.len(), "built skill catalog");
        Self { list, lookup }
    }

    /// Canonical entries in collation order.
    pub fn list(&self) -> &[String] {
        &self.list
    }

    pub fn lookup(&self) -> &SkillLookup {
        &self.lookup
    }

    /// Canonical spelling for `skill`, if the catalog recognizes it.
    pub fn resolve(&self, skill: &str) -> Option<&str> {
        self.lookup.get(&SkillKey::of(skill)).map(String::as_str)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.resolve(skill).is_some()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Free-function form of [`SkillCatalog::build`].
pub fn build_catalog(master_text: &str) -> SkillCatalog {
    SkillCatalog::build(master_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_master_is_sorted() {
        let catalog = build_catalog(r#"["Geometry","Algebra"]"#);
        assert_eq!(catalog.list(), ["Algebra", "Geometry"]);
    }

    #[test]
    fn first_spelling_becomes_canonical() {
        let catalog = build_catalog("data analysis\nData Analysis\nDecimals");
        assert_eq!(catalog.list(), ["data analysis", "Decimals"]);
        assert_eq!(catalog.resolve("DATA  ANALYSIS"), Some("data analysis"));
    }

    #[test]
    fn lookup_covers_every_entry() {
        let catalog = build_catalog("Fractions, Decimals; Measurement");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup().len(), 3);
        for skill in catalog.list() {
            assert_eq!(catalog.lookup().get(&SkillKey::of(skill)), Some(skill));
        }
        assert!(catalog.contains(" fractions "));
        assert!(!catalog.contains("Percentages"));
    }

    #[test]
    fn empty_master_is_empty_catalog() {
        let catalog = build_catalog("  \n ");
        assert!(catalog.is_empty());
        assert!(catalog.lookup().is_empty());
        assert_eq!(catalog, SkillCatalog::default());
    }
}
