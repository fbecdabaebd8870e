//! Memoized pipeline over three editable inputs.
//!
//! A session holds the raw master/passed/failed text and recomputes only the
//! stages whose inputs changed: the catalog when the master text changes, a
//! partition when its own text or the catalog changes, and the report when
//! anything upstream changes. Setting an input to its current value is a
//! no-op. Results always equal [`crate::reconcile`] on the same inputs.

use tracing::trace;

use crate::catalog::SkillCatalog;
use crate::coverage::aggregate;
use crate::partition::{PartitionResult, partition_text};
use crate::report::SkillReport;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
/// How many times each stage has actually run.
pub struct StageCounters {
    pub catalog_builds: usize,
    pub partitions: usize,
    pub reports: usize,
}

#[derive(Debug, Default)]
pub struct ReconcileSession {
    master_text: String,
    passed_text: String,
    failed_text: String,
    catalog: Option<SkillCatalog>,
    passed: Option<PartitionResult>,
    failed: Option<PartitionResult>,
    report: Option<SkillReport>,
    counters: StageCounters,
}

impl ReconcileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(master: &str, passed: &str, failed: &str) -> Self {
        let mut session = Self::new();
        session.set_master(master);
        session.set_passed(passed);
        session.set_failed(failed);
        session
    }

    pub fn set_master(&mut self, text: &str) {
        if self.master_text == text {
            return;
        }
        self.master_text = text.to_string();
        self.catalog = None;
        self.passed = None;
        self.failed = None;
        self.report = None;
    }

    pub fn set_passed(&mut self, text: &str) {
        if self.passed_text == text {
            return;
        }
        self.passed_text = text.to_string();
        self.passed = None;
        self.report = None;
    }

    pub fn set_failed(&mut self, text: &str) {
        if self.failed_text == text {
            return;
        }
        self.failed_text = text.to_string();
        self.failed = None;
        self.report = None;
    }

    pub fn master_text(&self) -> &str {
        &self.master_text
    }

    pub fn passed_text(&self) -> &str {
        &self.passed_text
    }

    pub fn failed_text(&self) -> &str {
        &self.failed_text
    }

    pub fn counters(&self) -> StageCounters {
        self.counters
    }

    /// Current catalog, building it if the master text changed.
    pub fn catalog(&mut self) -> &SkillCatalog {
        let counters = &mut self.counters;
        let master_text = &self.master_text;
        self.catalog.get_or_insert_with(|| {
            trace!("catalog cache miss");
            counters.catalog_builds += 1;
            SkillCatalog::build(master_text)
        })
    }

    /// Current report, recomputing only stale stages.
    pub fn report(&mut self) -> &SkillReport {
        let report = match self.report.take() {
            Some(report) => {
                trace!("report cache hit");
                report
            }
            None => {
                trace!("report cache miss");
                let (catalog, passed, failed) = self.stages();
                let summary = aggregate(
                    catalog.list(),
                    passed.canonical.as_slice(),
                    failed.canonical.as_slice(),
                );
                let report =
                    SkillReport::from_parts(catalog, passed.clone(), failed.clone(), summary);
                self.counters.reports += 1;
                report
            }
        };
        self.report.insert(report)
    }

    /// Catalog and both partitions, filling whichever are stale.
    fn stages(&mut self) -> (&SkillCatalog, &PartitionResult, &PartitionResult) {
        let counters = &mut self.counters;
        let master_text = &self.master_text;
        let catalog: &SkillCatalog = self.catalog.get_or_insert_with(|| {
            trace!("catalog cache miss");
            counters.catalog_builds += 1;
            SkillCatalog::build(master_text)
        });

        let passed_text = &self.passed_text;
        let passed: &PartitionResult = self.passed.get_or_insert_with(|| {
            counters.partitions += 1;
            partition_text(passed_text, catalog.lookup())
        });

        let failed_text = &self.failed_text;
        let failed: &PartitionResult = self.failed.get_or_insert_with(|| {
            counters.partitions += 1;
            partition_text(failed_text, catalog.lookup())
        });

        (catalog, passed, failed)
    }
}
