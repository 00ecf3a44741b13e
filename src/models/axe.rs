//! Input schema: axe-core scan results as emitted in JSON.
//!
//! Field names mirror axe-core's camelCase wire shape. Everything that can
//! be missing in a real result file carries `#[serde(default)]`, so a
//! malformed or partial file degrades to empty fields instead of a parse
//! error; stricter validation is the caller's business.

use serde::Deserialize;

#[derive(Deserialize, Default)]
/// The four result categories of one axe-core run.
///
/// Each category is optional: `None` means the run was not asked to report
/// that category, which is distinct from an empty list.
pub struct ScanResults {
    #[serde(default)]
    pub violations: Option<Vec<RuleResult>>,
    #[serde(default)]
    pub passes: Option<Vec<RuleResult>>,
    #[serde(default)]
    pub incomplete: Option<Vec<RuleResult>>,
    #[serde(default)]
    pub inapplicable: Option<Vec<RuleResult>>,
}

#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
/// One rule's evaluation outcome across all DOM locations it matched.
pub struct RuleResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    /// Severity level (minor|moderate|serious|critical) when axe assigns one.
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<NodeResult>,
    /// Reporter-specific label threaded through to each node detail.
    #[serde(default)]
    pub spec_name: Option<String>,
}

#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
/// One DOM location flagged by a rule.
pub struct NodeResult {
    /// Selector path to the element, one entry per shadow boundary crossed.
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub html: String,
    /// Free-text fix narrative; segments are separated by blank lines.
    #[serde(default)]
    pub failure_summary: Option<String>,
    /// Sub-check outcomes under axe's "any" group.
    #[serde(default)]
    pub any: Vec<CheckResult>,
}

#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
/// One granular sub-check contributing to a rule's verdict on a node.
pub struct CheckResult {
    #[serde(default)]
    pub related_nodes: Vec<RelatedNode>,
}

#[derive(Deserialize, Default, Clone)]
/// A cross-reference to another element involved in a sub-check.
pub struct RelatedNode {
    #[serde(default)]
    pub target: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_axe_snippet() {
        let data = r##"{
            "violations": [{
                "id": "image-alt",
                "impact": "critical",
                "tags": ["cat.text-alternatives", "wcag2a", "wcag111"],
                "description": "Ensures <img> elements have alternate text",
                "help": "Images must have alternate text",
                "helpUrl": "https://dequeuniversity.com/rules/axe/3.5/image-alt",
                "nodes": [{
                    "html": "<img src=\"smile.jpg\">",
                    "target": ["img"],
                    "failureSummary": "Fix any of the following:\n  Element does not have an alt attribute",
                    "any": [{
                        "id": "has-alt",
                        "relatedNodes": [{ "target": ["#main", "img"] }]
                    }]
                }]
            }],
            "passes": []
        }"##;
        let parsed: ScanResults = serde_json::from_str(data).unwrap();
        let violations = parsed.violations.unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].id, "image-alt");
        assert_eq!(violations[0].impact.as_deref(), Some("critical"));
        assert_eq!(violations[0].nodes[0].target, vec!["img"]);
        assert_eq!(
            violations[0].nodes[0].any[0].related_nodes[0].target,
            vec!["#main", "img"]
        );
        assert!(parsed.passes.unwrap().is_empty());
        assert!(parsed.incomplete.is_none());
        assert!(parsed.inapplicable.is_none());
    }

    #[test]
    fn test_partial_fields_degrade_to_defaults() {
        let data = r#"{ "violations": [{ "id": "html-has-lang", "nodes": [{}] }] }"#;
        let parsed: ScanResults = serde_json::from_str(data).unwrap();
        let v = &parsed.violations.unwrap()[0];
        assert!(v.impact.is_none());
        assert!(v.tags.is_empty());
        assert!(v.help_url.is_empty());
        let n = &v.nodes[0];
        assert!(n.target.is_empty());
        assert!(n.failure_summary.is_none());
        assert!(n.any.is_empty());
    }
}
