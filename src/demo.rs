//! Demo dataset: a 12-skill maths catalog with a partly assessed student.

use crate::report::{SkillReport, reconcile};

pub const DEMO_MASTER: &str = "Algebra Basics
Algebraic Expressions
Data Analysis
Decimals
Fractions
Geometry: Angles
Geometry: Shapes
Measurement
Number Patterns
Percentages
Probability
Word Problems";

pub const DEMO_PASSED: &str = "Decimals
Fractions
Measurement
Number Patterns";

pub const DEMO_FAILED: &str = "Percentages
Probability
Algebraic Expressions";

pub fn demo_report() -> SkillReport {
    reconcile(DEMO_MASTER, DEMO_PASSED, DEMO_FAILED)
}
