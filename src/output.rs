use std::sync::OnceLock;

use crate::cli::OutputFormat;

/// Global output settings, fixed once at startup.
static FORMAT: OnceLock<OutputFormat> = OnceLock::new();
static QUIET: OnceLock<bool> = OnceLock::new();

pub fn set_format(format: OutputFormat) {
    let _ = FORMAT.set(format);
}

pub fn format() -> OutputFormat {
    FORMAT.get().copied().unwrap_or_default()
}

pub fn set_quiet(quiet: bool) {
    let _ = QUIET.set(quiet);
}

pub fn is_quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}

/// Print a status message (skipped when quiet, or a simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    match format() {
        OutputFormat::Json => println!("{}", serde_json::json!({ "message": message })),
        OutputFormat::Table | OutputFormat::Compact => println!("{message}"),
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Fix typo", 50), "Fix typo");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
