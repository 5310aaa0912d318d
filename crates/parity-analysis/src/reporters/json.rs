//! JSON reporter: the full comparison result plus its issue list.

use parity_core::errors::ReportError;
use serde::Serialize;

use super::Reporter;
use crate::engine::ComparisonResult;
use crate::issues::{Issue, IssueFormatter};

/// Pretty-printed JSON of the result and its issues.
#[derive(Default)]
pub struct JsonReporter {
    formatter: IssueFormatter,
}

impl JsonReporter {
    pub fn new(formatter: IssueFormatter) -> Self {
        Self { formatter }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    result: &'a ComparisonResult,
    issues: Vec<Issue>,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError> {
        let report = JsonReport {
            result,
            issues: self.formatter.format(result),
        };
        serde_json::to_string_pretty(&report).map_err(|e| ReportError::Serialization {
            reporter: "json",
            message: e.to_string(),
        })
    }
}
