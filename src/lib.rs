//! Shared library for the skillmatch tools.
//!
//! The crate reconciles three free-text skill lists (a master catalog, the
//! skills a student passed, and the skills they attempted without passing)
//! into a normalized report: canonical passed/failed sets, entries outside
//! the catalog, a recommended list of untouched skills, and coverage
//! percentages. Every pipeline stage is a pure, total function over strings;
//! the binaries under `src/bin/` are thin callers that read input and render
//! the result.

pub mod catalog;
pub mod collation;
pub mod coverage;
pub mod dedupe;
pub mod demo;
pub mod normalize;
pub mod parser;
pub mod partition;
pub mod report;
pub mod report_schema;
pub mod runtime;
pub mod session;

pub use catalog::{SkillCatalog, SkillKey, SkillLookup, build_catalog};
pub use collation::{compare_skills, sort_skills};
pub use coverage::{CoverageSummary, aggregate};
pub use dedupe::dedupe;
pub use normalize::normalize_key;
pub use parser::parse_skills;
pub use partition::{PartitionResult, partition, partition_text};
pub use report::{SkillReport, reconcile};
pub use report_schema::{report_to_validated_json, validate_report};
pub use session::ReconcileSession;
