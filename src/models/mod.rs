//! Shared data models for the normalized report and the axe input schema.

pub mod axe;

use serde::Serialize;

#[derive(Serialize, Clone)]
/// One parsed fix recommendation: a highlight line plus supporting steps.
pub struct FixGroup {
    pub highlight: String,
    pub list: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// Per-rule summary row used by the summary tables.
pub struct RuleSummary {
    pub index: usize,
    pub description: String,
    pub id: String,
    pub help: String,
    pub wcag: String,
    pub tags: Vec<String>,
    pub impact: String,
    /// Count of offending nodes, not the nodes themselves.
    pub nodes: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// Expanded detail for one violated rule.
pub struct ViolationDetail {
    pub index: usize,
    pub wcag: String,
    pub tags: Vec<String>,
    pub id: String,
    pub impact: String,
    pub description: String,
    pub help: String,
    pub help_url: String,
    pub nodes: Vec<NodeDetail>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// Detail for one offending node within a violation.
pub struct NodeDetail {
    /// Selector path joined into one newline-separated string.
    pub target_nodes: String,
    pub html: String,
    pub fix_summaries: Vec<FixGroup>,
    /// Newline-joined targets of related nodes gathered across sub-checks.
    pub related_nodes_any: Vec<String>,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// Normalized report container.
///
/// `violations_summary_table` and `violations_details` are present exactly
/// when the input carried at least one violation; the three check tables
/// mirror which input categories were supplied.
pub struct Report {
    pub violations_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations_summary_table: Option<Vec<RuleSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations_details: Option<Vec<ViolationDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks_passed: Option<Vec<RuleSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks_incomplete: Option<Vec<RuleSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks_inapplicable: Option<Vec<RuleSummary>>,
}
