//! Output rendering for the report command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! full normalized report per file plus a top-level summary; the human form
//! prints a compact colored digest of the same model.

use crate::models::{Report, RuleSummary};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Total offending nodes behind a report, derived from its summary table.
pub fn violations_total(report: &Report) -> usize {
    report
        .violations_summary_table
        .as_ref()
        .map(|rows| rows.iter().map(|r| r.nodes).sum())
        .unwrap_or(0)
}

/// Print reports for all scanned files in the requested format.
///
/// `errors` are load/parse problems collected alongside; they go to stderr
/// in human mode and into the JSON payload otherwise.
pub fn print_reports(reports: &[(String, Report)], output: &str, errors: &[String]) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_reports_json(reports, errors)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for e in errors {
                eprintln!("{} {}", crate::utils::error_prefix(), e);
            }
            for (file, report) in reports {
                print_human(file, report, color);
            }
        }
    }
}

fn print_human(file: &str, report: &Report, color: bool) {
    if color {
        println!("{}", file.bold());
    } else {
        println!("{}", file);
    }
    let total = violations_total(report);
    match report.violations_details.as_ref() {
        None => {
            let line = "✔ 0 violations".to_string();
            if color {
                println!("{}", line.green().bold());
            } else {
                println!("{}", line);
            }
        }
        Some(details) => {
            let line = format!(
                "✖ {} violation{}",
                total,
                if total == 1 { "" } else { "s" }
            );
            if color {
                println!("{}", line.red().bold());
            } else {
                println!("{}", line);
            }
            for v in details {
                let impact = impact_badge(&v.impact, color);
                println!("{}. {} {} — {} ❲{}❳", v.index, impact, v.id, v.help, v.wcag);
                for n in &v.nodes {
                    for (i, sel) in n.target_nodes.split('\n').enumerate() {
                        if i == 0 {
                            println!("   {}.{} {}", v.index, n.index, sel);
                        } else {
                            println!("       {}", sel);
                        }
                    }
                    for fix in &n.fix_summaries {
                        println!("       fix: {}", fix.highlight);
                        for step in &fix.list {
                            println!("            {}", step.trim());
                        }
                    }
                    for related in &n.related_nodes_any {
                        println!("       related: {}", related.replace('\n', " > "));
                    }
                }
            }
        }
    }
    print_category("passed", report.checks_passed.as_deref(), color);
    print_category("incomplete", report.checks_incomplete.as_deref(), color);
    print_category("inapplicable", report.checks_inapplicable.as_deref(), color);
}

fn print_category(name: &str, rows: Option<&[RuleSummary]>, color: bool) {
    if let Some(rows) = rows {
        let line = format!("— {} checks: {}", name, rows.len());
        if color {
            println!("{}", line.bright_black().to_string());
        } else {
            println!("{}", line);
        }
    }
}

fn impact_badge(impact: &str, color: bool) -> String {
    let badge = format!("⟦{}⟧", impact);
    if !color {
        return badge;
    }
    match impact {
        "critical" | "serious" => badge.red().bold().to_string(),
        "moderate" => badge.yellow().bold().to_string(),
        "minor" => badge.blue().bold().to_string(),
        _ => badge,
    }
}

/// Compose the JSON payload (pure) for testing/snapshot purposes.
pub fn compose_reports_json(reports: &[(String, Report)], errors: &[String]) -> JsonVal {
    let items: Vec<_> = reports
        .iter()
        .map(|(file, report)| {
            json!({
                "file": file,
                "report": serde_json::to_value(report).unwrap(),
            })
        })
        .collect();
    let summary = json!({
        "files": reports.len(),
        "violations": reports.iter().map(|(_, r)| violations_total(r)).sum::<usize>(),
        "errors": errors.len(),
    });
    json!({"reports": items, "summary": summary, "errors": errors})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::axe::{NodeResult, RuleResult, ScanResults};
    use crate::report::prepare_report;

    fn lookup(tags: &[String]) -> String {
        tags.join(", ")
    }

    fn sample_results(violation_nodes: usize) -> ScanResults {
        let nodes = (0..violation_nodes)
            .map(|_| NodeResult {
                target: vec!["img".to_string()],
                html: "<img>".to_string(),
                failure_summary: None,
                any: Vec::new(),
            })
            .collect::<Vec<_>>();
        let violations = if nodes.is_empty() {
            Vec::new()
        } else {
            vec![RuleResult {
                id: "image-alt".to_string(),
                impact: Some("critical".to_string()),
                nodes,
                ..RuleResult::default()
            }]
        };
        ScanResults {
            violations: Some(violations),
            passes: Some(Vec::new()),
            incomplete: None,
            inapplicable: None,
        }
    }

    #[test]
    fn test_compose_reports_json_shape() {
        let report = prepare_report(&sample_results(2), &lookup);
        let out = compose_reports_json(&[("results.json".to_string(), report)], &[]);
        assert_eq!(out["summary"]["files"], 1);
        assert_eq!(out["summary"]["violations"], 2);
        assert_eq!(out["reports"][0]["file"], "results.json");
        let rep = &out["reports"][0]["report"];
        assert!(rep["violationsSummary"].as_str().unwrap().contains("2"));
        assert_eq!(rep["violationsSummaryTable"][0]["nodes"], 2);
        assert_eq!(rep["violationsDetails"][0]["nodes"][1]["index"], 2);
        // Absent categories are omitted from the payload entirely.
        assert!(rep.get("checksIncomplete").is_none());
        assert_eq!(rep["checksPassed"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_compose_reports_json_zero_violations() {
        let report = prepare_report(&sample_results(0), &lookup);
        let out = compose_reports_json(
            &[("results.json".to_string(), report)],
            &["'x.json' is not valid axe result JSON: oops".to_string()],
        );
        assert_eq!(out["summary"]["violations"], 0);
        assert_eq!(out["summary"]["errors"], 1);
        let rep = &out["reports"][0]["report"];
        assert!(rep["violationsSummary"].as_str().unwrap().contains("0"));
        assert!(rep.get("violationsDetails").is_none());
        assert!(rep.get("violationsSummaryTable").is_none());
    }

    #[test]
    fn test_violations_total_derived_from_table() {
        let report = prepare_report(&sample_results(3), &lookup);
        assert_eq!(violations_total(&report), 3);
        let zero = prepare_report(&sample_results(0), &lookup);
        assert_eq!(violations_total(&zero), 0);
    }
}
