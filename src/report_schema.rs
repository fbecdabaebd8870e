//! JSON Schema contract for serialized reports.
//!
//! The schema lives in `schema/skill_report.schema.json` and is embedded at
//! compile time so installed binaries validate without the source tree.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

use crate::report::SkillReport;

pub const REPORT_SCHEMA_SOURCE: &str = include_str!("../schema/skill_report.schema.json");

fn schema_value() -> Result<&'static Value> {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    if let Some(value) = SCHEMA.get() {
        return Ok(value);
    }
    let parsed: Value =
        serde_json::from_str(REPORT_SCHEMA_SOURCE).context("parsing embedded report schema")?;
    Ok(SCHEMA.get_or_init(|| parsed))
}

/// Compile the embedded report schema.
pub fn compile_report_schema() -> Result<JSONSchema> {
    let schema = schema_value()?;
    JSONSchema::compile(schema).map_err(|err| anyhow!("compiling report schema: {err}"))
}

/// Validate a serialized report, listing every violation on failure.
pub fn validate_report(value: &Value) -> Result<()> {
    let compiled = compile_report_schema()?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("skill report failed schema validation:\n{details}");
    }
    Ok(())
}

/// Serialize `report` and validate it against the schema.
pub fn report_to_validated_json(report: &SkillReport) -> Result<Value> {
    let value = serde_json::to_value(report).context("serializing skill report")?;
    validate_report(&value)?;
    Ok(value)
}
