use super::Locale;

/// Environment variables consulted for the UI language, highest priority first.
const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detects the OS locale from the first non-empty locale variable.
pub fn detect_locale() -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .map_or(Locale::En, |value| locale_from_tag(&value))
}

/// Maps a POSIX locale tag such as `uk_UA.UTF-8` to a supported locale.
pub fn locale_from_tag(tag: &str) -> Locale {
    if tag.starts_with("uk") {
        Locale::Uk
    } else {
        Locale::En
    }
}
