//! Supported language tables. Static configuration; the selectors render
//! these in order and the first entry of each table is the default.

pub const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("es", "Spanish"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
];

pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("es", "Spanish"),
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
];

pub fn default_source() -> &'static str {
    SOURCE_LANGUAGES[0].0
}

pub fn default_target() -> &'static str {
    TARGET_LANGUAGES[0].0
}

pub fn is_source(code: &str) -> bool {
    SOURCE_LANGUAGES.iter().any(|(c, _)| *c == code)
}

pub fn is_target(code: &str) -> bool {
    TARGET_LANGUAGES.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_hold_fourteen_languages_each() {
        assert_eq!(SOURCE_LANGUAGES.len(), 14);
        assert_eq!(TARGET_LANGUAGES.len(), 14);
    }

    #[test]
    fn defaults_are_first_entries() {
        assert_eq!(default_source(), "en");
        assert_eq!(default_target(), "es");
    }

    #[test]
    fn membership_checks() {
        assert!(is_source("hi"));
        assert!(is_target("tr"));
        assert!(!is_source("xx"));
        assert!(!is_target(""));
    }
}
