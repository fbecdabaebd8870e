//! Whole-pipeline reconciliation and report rendering.
//!
//! Data flows one way: master text builds the catalog, passed and failed text
//! are partitioned against it, and the canonical sides feed the coverage
//! aggregate. [`SkillReport`] bundles everything a caller renders.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::SkillCatalog;
use crate::coverage::{CoverageSummary, aggregate};
use crate::partition::{PartitionResult, partition_text};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Every derived list and counter for one master/passed/failed input triple.
pub struct SkillReport {
    pub master: Vec<String>,
    pub passed: Vec<String>,
    pub passed_unknown: Vec<String>,
    pub failed: Vec<String>,
    pub failed_unknown: Vec<String>,
    pub recommended: Vec<String>,
    pub attempted_count: usize,
    pub coverage: u32,
    pub remaining_gap_percent: u32,
}

impl SkillReport {
    /// Assemble a report from already-computed pipeline stages.
    pub fn from_parts(
        catalog: &SkillCatalog,
        passed: PartitionResult,
        failed: PartitionResult,
        summary: CoverageSummary,
    ) -> Self {
        Self {
            master: catalog.list().to_vec(),
            passed: passed.canonical,
            passed_unknown: passed.unknown,
            failed: failed.canonical,
            failed_unknown: failed.unknown,
            recommended: summary.recommended,
            attempted_count: summary.attempted_count,
            coverage: summary.coverage,
            remaining_gap_percent: summary.remaining_gap_percent,
        }
    }

    /// Human-readable summary for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    pub fn write_text(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(
            writer,
            "Master skills: {} | Passed: {} | Failed: {} | Recommended next: {} | Coverage: {}%",
            self.master.len(),
            self.passed.len(),
            self.failed.len(),
            self.recommended.len(),
            self.coverage
        )?;

        writeln!(writer)?;
        writeln!(
            writer,
            "Passed skills (sorted alphabetically, {} skills)",
            self.passed.len()
        )?;
        render_list(&self.passed, "No passed skills yet.", writer)?;
        render_unknown(&self.passed_unknown, writer)?;

        writeln!(writer)?;
        writeln!(
            writer,
            "Failed skills (attempted but not passed, {} skills)",
            self.failed.len()
        )?;
        render_list(&self.failed, "No failed skills yet.", writer)?;
        render_unknown(&self.failed_unknown, writer)?;

        writeln!(writer)?;
        writeln!(
            writer,
            "Recommended next focus (not yet passed or attempted, {} skills)",
            self.recommended.len()
        )?;
        render_list(&self.recommended, "All skills have been attempted.", writer)?;

        writeln!(writer)?;
        writeln!(writer, "Total skills attempted so far: {}", self.attempted_count)?;
        writeln!(
            writer,
            "Remaining gap: {} of {} ({}%)",
            self.recommended.len(),
            self.master.len(),
            self.remaining_gap_percent
        )
    }
}

fn render_list(items: &[String], empty_label: &str, writer: &mut impl fmt::Write) -> fmt::Result {
    if items.is_empty() {
        return writeln!(writer, "  {empty_label}");
    }
    for item in items {
        writeln!(writer, "  - {item}")?;
    }
    Ok(())
}

fn render_unknown(items: &[String], writer: &mut impl fmt::Write) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(writer, "  Outside master catalog:")?;
    for item in items {
        writeln!(writer, "    ! {item}")?;
    }
    Ok(())
}

/// Run the full pipeline over three raw input strings.
pub fn reconcile(master_text: &str, passed_text: &str, failed_text: &str) -> SkillReport {
    let catalog = SkillCatalog::build(master_text);
    let passed = partition_text(passed_text, catalog.lookup());
    let failed = partition_text(failed_text, catalog.lookup());
    let summary = aggregate(
        catalog.list(),
        passed.canonical.as_slice(),
        failed.canonical.as_slice(),
    );
    SkillReport::from_parts(&catalog, passed, failed, summary)
}
