use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// The six analysis categories the service may return. Field names are
/// camelCase on the wire; every field is independently optional, and an
/// absent list renders the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSections {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub risky_or_vague_clauses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_important_clauses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidentiality_clause: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compliance_or_legal_risks: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions_for_improvement: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_language_summary: Option<String>,
}

impl AnalysisSections {
    /// True when no field would render anything.
    pub fn is_empty(&self) -> bool {
        self.risky_or_vague_clauses.is_empty()
            && self.missing_important_clauses.is_empty()
            && self.compliance_or_legal_risks.is_empty()
            && self.suggestions_for_improvement.is_empty()
            && self
                .confidentiality_clause
                .as_deref()
                .map_or(true, str::is_empty)
            && self
                .plain_language_summary
                .as_deref()
                .map_or(true, str::is_empty)
    }
}

/// Result of one analysis. All four fields are independently optional and
/// may co-occur: the service returns `sections` alongside the `raw` model
/// output it parsed them from, and an `error` does not suppress whatever
/// sections came with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<AnalysisSections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Whether there is anything to show besides an error. Absence of all
    /// three content fields is the only condition for the empty state.
    pub fn has_content(&self) -> bool {
        self.sections.as_ref().is_some_and(|s| !s.is_empty())
            || self.analysis.as_deref().is_some_and(|a| !a.is_empty())
            || self.raw.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// Metadata of a user-selected file. The decoded text is carried separately
/// and the selection is only kept to display its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub name: String,
    pub declared_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sections_use_camel_case_on_the_wire() {
        let body = json!({
            "riskyOrVagueClauses": ["auto-renewal with no notice period"],
            "confidentialityClause": "Present, 2-year term",
            "plainLanguageSummary": "A standard NDA."
        });

        let sections: AnalysisSections = serde_json::from_value(body).unwrap();
        assert_eq!(
            sections.risky_or_vague_clauses,
            vec!["auto-renewal with no notice period"]
        );
        assert_eq!(
            sections.confidentiality_clause.as_deref(),
            Some("Present, 2-year term")
        );
        assert!(sections.missing_important_clauses.is_empty());
    }

    #[test]
    fn every_report_field_is_independently_optional() {
        let report: AnalysisReport = serde_json::from_value(json!({})).unwrap();
        assert_eq!(report, AnalysisReport::default());

        let report: AnalysisReport =
            serde_json::from_value(json!({ "raw": "unstructured output" })).unwrap();
        assert_eq!(report.raw.as_deref(), Some("unstructured output"));
        assert!(report.sections.is_none());
    }

    #[test]
    fn error_and_sections_co_occur() {
        let report: AnalysisReport = serde_json::from_value(json!({
            "sections": { "plainLanguageSummary": "Short lease." },
            "error": "model output was truncated"
        }))
        .unwrap();

        assert!(report.has_content());
        assert_eq!(report.error.as_deref(), Some("model output was truncated"));
    }

    #[test]
    fn has_content_requires_a_populated_field() {
        let mut report = AnalysisReport {
            sections: Some(AnalysisSections::default()),
            ..AnalysisReport::default()
        };
        assert!(!report.has_content());

        report.analysis = Some(String::new());
        assert!(!report.has_content());

        report.analysis = Some("The contract is one-sided.".into());
        assert!(report.has_content());
    }

    #[test]
    fn empty_sections_checks_both_strings_and_lists() {
        let mut sections = AnalysisSections {
            confidentiality_clause: Some(String::new()),
            ..AnalysisSections::default()
        };
        assert!(sections.is_empty());

        sections.compliance_or_legal_risks = vec!["GDPR transfer clause missing".into()];
        assert!(!sections.is_empty());
    }
}
