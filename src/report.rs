//! Report assembly: turns parsed axe results into the display-ready model.
//!
//! Three cooperating steps, all pure:
//! - `summarize_results` maps a result category into per-rule summary rows.
//! - `split_fix_summary` parses a blank-line-delimited fix narrative into
//!   highlight/list groups.
//! - `prepare_report` folds the categories together: violation totals,
//!   summary table, and the expanded per-violation/per-node details.
//!
//! The standards-reference lookup (tags -> WCAG criterion or similar) is
//! injected by the caller so the assembly stays independent of any
//! particular taxonomy.

use crate::models::axe::{RuleResult, ScanResults};
use crate::models::{FixGroup, NodeDetail, Report, RuleSummary, ViolationDetail};

/// Lookup from a rule's tag set to a standards-reference string.
pub type WcagLookup<'a> = &'a dyn Fn(&[String]) -> String;

/// Highlight used when a node carries no fix narrative at all.
pub const NO_FIX_HIGHLIGHT: &str = "Recommendation with the fix was not provided by axe result";

/// Map a result category into summary rows, preserving input order.
///
/// Indices are 1-based by position; a missing impact becomes `"n/a"`;
/// `nodes` is the offending-node count.
pub fn summarize_results(results: &[RuleResult], wcag: WcagLookup<'_>) -> Vec<RuleSummary> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| RuleSummary {
            index: i + 1,
            description: r.description.clone(),
            id: r.id.clone(),
            help: r.help.clone(),
            wcag: wcag(&r.tags),
            tags: r.tags.clone(),
            impact: r.impact.clone().unwrap_or_else(|| "n/a".to_string()),
            nodes: r.nodes.len(),
        })
        .collect()
}

/// Split a fix narrative into groups: blank lines separate independent
/// failure segments, the first line of each segment is the highlight and
/// the remaining lines its supporting list.
///
/// The segmentation is a textual convention of axe's output; downstream
/// consumers rely on it, so it is preserved verbatim.
pub fn split_fix_summary(failure_summary: &str, default_highlight: &FixGroup) -> Vec<FixGroup> {
    failure_summary
        .split("\n\n")
        .map(|segment| {
            let mut lines = segment.split('\n').map(|l| l.to_string());
            match lines.next() {
                // Unreachable through normal splitting; kept as a safety net.
                None => default_highlight.clone(),
                Some(highlight) => FixGroup {
                    highlight,
                    list: lines.collect(),
                },
            }
        })
        .collect()
}

/// Assemble the full report from one scan's result categories.
///
/// Violation totals count offending nodes, not rules. With no violations
/// the table and detail fields stay absent (`None`), never empty; the
/// three check tables mirror exactly which categories were supplied.
pub fn prepare_report(results: &ScanResults, wcag: WcagLookup<'_>) -> Report {
    let checks_passed = results.passes.as_deref().map(|r| summarize_results(r, wcag));
    let checks_incomplete = results
        .incomplete
        .as_deref()
        .map(|r| summarize_results(r, wcag));
    let checks_inapplicable = results
        .inapplicable
        .as_deref()
        .map(|r| summarize_results(r, wcag));

    let violations = results.violations.as_deref().unwrap_or(&[]);
    let violations_total: usize = violations.iter().map(|v| v.nodes.len()).sum();

    if violations.is_empty() {
        return Report {
            violations_summary:
                "axe-core found <span class=\"badge badge-success\">0</span> violations"
                    .to_string(),
            violations_summary_table: None,
            violations_details: None,
            checks_passed,
            checks_incomplete,
            checks_inapplicable,
        };
    }

    let violations_summary = format!(
        "axe-core found <span class=\"badge badge-warning\">{}</span> violation{}",
        violations_total,
        if violations_total == 1 { "" } else { "s" }
    );

    let violations_summary_table = summarize_results(violations, wcag);

    let violations_details = violations
        .iter()
        .enumerate()
        .map(|(issue_index, v)| ViolationDetail {
            index: issue_index + 1,
            wcag: wcag(&v.tags),
            tags: v.tags.clone(),
            id: v.id.clone(),
            impact: v.impact.clone().unwrap_or_else(|| "n/a".to_string()),
            description: v.description.clone(),
            help: v.help.clone(),
            help_url: v.help_url.clone(),
            nodes: v
                .nodes
                .iter()
                .enumerate()
                .map(|(node_index, n)| {
                    let default_highlight = FixGroup {
                        highlight: NO_FIX_HIGHLIGHT.to_string(),
                        list: Vec::new(),
                    };
                    let fix_summaries = match n.failure_summary.as_deref() {
                        Some(summary) => split_fix_summary(summary, &default_highlight),
                        None => vec![default_highlight],
                    };
                    let mut related_nodes_any: Vec<String> = Vec::new();
                    for check in &n.any {
                        for related in &check.related_nodes {
                            if !related.target.is_empty() {
                                related_nodes_any.push(related.target.join("\n"));
                            }
                        }
                    }
                    NodeDetail {
                        target_nodes: n.target.join("\n"),
                        html: n.html.clone(),
                        fix_summaries,
                        related_nodes_any,
                        index: node_index + 1,
                        spec_name: v.spec_name.clone(),
                    }
                })
                .collect(),
        })
        .collect();

    Report {
        violations_summary,
        violations_summary_table: Some(violations_summary_table),
        violations_details: Some(violations_details),
        checks_passed,
        checks_incomplete,
        checks_inapplicable,
    }
}
