//! Supporting helpers: colored stderr prefixes for CLI messages.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal CLI errors.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "⟦error⟧".red().bold().to_string()
    } else {
        "⟦error⟧".to_string()
    }
}

/// Prefix for friendly notes.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "⟦note⟧".blue().bold().to_string()
    } else {
        "⟦note⟧".to_string()
    }
}

/// Prefix for informational messages.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "⟦info⟧".cyan().bold().to_string()
    } else {
        "⟦info⟧".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_text_stable_under_coloring() {
        // ANSI styling wraps the glyph text; the label itself never changes.
        assert!(error_prefix().contains("⟦error⟧"));
        assert!(note_prefix().contains("⟦note⟧"));
        assert!(info_prefix().contains("⟦info⟧"));
    }
}
