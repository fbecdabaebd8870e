//! Master skill catalog.
//!
//! The catalog is the single source of truth for "is this skill recognized".
//! It is rebuilt from the master text on every change; nothing carries over
//! between builds. Types here expose the sorted display list and a lookup
//! from [`SkillKey`] to the canonical spelling.

pub mod identity;
pub mod model;

pub use identity::SkillKey;
pub use model::{SkillCatalog, SkillLookup, build_catalog};
