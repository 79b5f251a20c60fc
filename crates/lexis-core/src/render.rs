//! Six-box report render model
//!
//! Maps resolved sections onto the fixed set of display boxes. Presentation
//! code serializes this model instead of reading the raw response.

use serde::Serialize;
use shared_types::AnalysisSections;

/// Glyph shown for an absent or empty field.
pub const PLACEHOLDER: &str = "—";

/// Accent color of a report box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Orange,
    Blue,
    Purple,
    Green,
}

/// Body of one report box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SectionBody {
    /// Ordered list items, one per element, duplicates preserved.
    Items(Vec<String>),
    /// A single string rendered verbatim.
    Text(String),
    /// Nothing to show; render [`PLACEHOLDER`].
    Placeholder,
}

/// One of the six fixed report boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub title: &'static str,
    pub accent: Accent,
    pub body: SectionBody,
}

/// Map the resolved fields onto the six report boxes, in fixed order,
/// substituting the placeholder wherever a field is absent or empty.
pub fn render_sections(sections: &AnalysisSections) -> Vec<RenderedSection> {
    vec![
        RenderedSection {
            title: "Risky or Vague Clauses",
            accent: Accent::Red,
            body: list_body(&sections.risky_or_vague_clauses),
        },
        RenderedSection {
            title: "Missing Important Clauses",
            accent: Accent::Orange,
            body: list_body(&sections.missing_important_clauses),
        },
        RenderedSection {
            title: "Confidentiality Clause",
            accent: Accent::Blue,
            body: text_body(sections.confidentiality_clause.as_deref()),
        },
        RenderedSection {
            title: "Compliance or Legal Risks",
            accent: Accent::Purple,
            body: list_body(&sections.compliance_or_legal_risks),
        },
        RenderedSection {
            title: "Suggestions for Improvement",
            accent: Accent::Green,
            body: list_body(&sections.suggestions_for_improvement),
        },
        RenderedSection {
            title: "Plain-Language Summary",
            accent: Accent::Blue,
            body: text_body(sections.plain_language_summary.as_deref()),
        },
    ]
}

fn list_body(items: &[String]) -> SectionBody {
    if items.is_empty() {
        SectionBody::Placeholder
    } else {
        SectionBody::Items(items.to_vec())
    }
}

fn text_body(value: Option<&str>) -> SectionBody {
    match value {
        Some(text) if !text.is_empty() => SectionBody::Text(text.to_owned()),
        _ => SectionBody::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(rendered: &[RenderedSection]) -> Vec<&'static str> {
        rendered.iter().map(|s| s.title).collect()
    }

    #[test]
    fn always_renders_six_boxes_in_fixed_order() {
        let rendered = render_sections(&AnalysisSections::default());
        assert_eq!(
            titles(&rendered),
            vec![
                "Risky or Vague Clauses",
                "Missing Important Clauses",
                "Confidentiality Clause",
                "Compliance or Legal Risks",
                "Suggestions for Improvement",
                "Plain-Language Summary",
            ]
        );
        assert!(rendered.iter().all(|s| s.body == SectionBody::Placeholder));
    }

    #[test]
    fn list_items_keep_order_and_duplicates() {
        let sections = AnalysisSections {
            risky_or_vague_clauses: vec!["a".into(), "b".into(), "a".into(), "c".into()],
            ..AnalysisSections::default()
        };
        let rendered = render_sections(&sections);
        assert_eq!(
            rendered[0].body,
            SectionBody::Items(vec!["a".into(), "b".into(), "a".into(), "c".into()])
        );
    }

    #[test]
    fn confidentiality_only_leaves_placeholders_elsewhere() {
        let sections = AnalysisSections {
            confidentiality_clause: Some("Present, 2-year term".into()),
            ..AnalysisSections::default()
        };
        let rendered = render_sections(&sections);

        assert_eq!(
            rendered[2].body,
            SectionBody::Text("Present, 2-year term".into())
        );
        for (i, section) in rendered.iter().enumerate() {
            if i != 2 {
                assert_eq!(section.body, SectionBody::Placeholder, "{}", section.title);
            }
        }
    }

    #[test]
    fn empty_string_fields_render_the_placeholder() {
        let sections = AnalysisSections {
            plain_language_summary: Some(String::new()),
            ..AnalysisSections::default()
        };
        let rendered = render_sections(&sections);
        assert_eq!(rendered[5].body, SectionBody::Placeholder);
    }

    #[test]
    fn body_serializes_with_a_kind_tag() {
        let body = serde_json::to_value(SectionBody::Items(vec!["x".into()])).unwrap();
        assert_eq!(body, serde_json::json!({ "kind": "items", "value": ["x"] }));

        let body = serde_json::to_value(SectionBody::Placeholder).unwrap();
        assert_eq!(body, serde_json::json!({ "kind": "placeholder" }));
    }
}
