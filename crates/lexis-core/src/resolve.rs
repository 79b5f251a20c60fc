//! Response shape resolution
//!
//! Classifies a raw response body into whatever subset of
//! `{sections, analysis, raw, error}` it carries. Pure shape work: no
//! content interpretation, and no shape is ever rejected.

use serde_json::Value;
use shared_types::{AnalysisReport, AnalysisSections};

/// Extract the strict-optional field set from a parsed body. Fields with
/// unexpected types count as absent rather than failing the whole response.
pub fn resolve(body: &Value) -> AnalysisReport {
    AnalysisReport {
        sections: body
            .get("sections")
            .and_then(Value::as_object)
            .map(|map| AnalysisSections {
                risky_or_vague_clauses: string_list(map.get("riskyOrVagueClauses")),
                missing_important_clauses: string_list(map.get("missingImportantClauses")),
                confidentiality_clause: string(map.get("confidentialityClause")),
                compliance_or_legal_risks: string_list(map.get("complianceOrLegalRisks")),
                suggestions_for_improvement: string_list(map.get("suggestionsForImprovement")),
                plain_language_summary: string(map.get("plainLanguageSummary")),
            }),
        analysis: string(body.get("analysis")),
        raw: string(body.get("raw")),
        error: string(body.get("error")),
    }
}

fn string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

/// Ordered sequence of strings. Non-string elements are skipped; anything
/// that is not an array counts as absent.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
