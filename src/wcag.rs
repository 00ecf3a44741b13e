//! Default standards-reference lookup for the CLI.
//!
//! Selects the tags that name an accessibility standard and joins them;
//! it does not translate tags into criterion titles. Library callers that
//! want a real taxonomy can inject their own lookup into `report`.

/// True when a tag names a standard rather than an axe-internal category.
fn is_standard_tag(tag: &str) -> bool {
    tag.starts_with("wcag")
        || tag.starts_with("section508")
        || tag.starts_with("TT")
        || tag.starts_with("EN-")
        || tag == "ACT"
        || tag == "best-practice"
}

/// Join the standards-looking tags of a rule, or `"n/a"` when none match.
pub fn reference_from_tags(tags: &[String]) -> String {
    let picked: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|t| is_standard_tag(t))
        .collect();
    if picked.is_empty() {
        "n/a".to_string()
    } else {
        picked.join(", ")
    }
}
