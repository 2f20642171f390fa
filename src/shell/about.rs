//! Informational "about" panel

use crate::localization::Translations;

/// Project page of the TOTP Manager
pub const PROJECT_URL: &str = "https://github.com/Migrim/OTP-Manager";

/// Build the about panel text
pub fn about_text(tr: &Translations) -> String {
    let title = tr.get("about_title");
    let rule = "=".repeat(title.chars().count());
    format!(
        "{title}\n{rule}\n{}\n{}\n{}\n\n[{}]",
        tr.get("about_heading"),
        tr.get("about_copyright"),
        tr.format("about_link", &[("url", PROJECT_URL)]),
        tr.get("close"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text_english() {
        let text = about_text(&Translations::new().unwrap());
        assert!(text.starts_with("About TOTP Manager\n==================\n"));
        assert!(text.contains("SQLite Management Utility for TOTP Manager"));
        assert!(text.contains("2023 Sebastian Junginger"));
        assert!(text.contains(PROJECT_URL));
    }

    #[test]
    fn test_about_text_german() {
        let text = about_text(&Translations::for_language("de").unwrap());
        assert!(text.contains("Lizenziert unter Creative Commons"));
        assert!(text.contains(PROJECT_URL));
    }
}
