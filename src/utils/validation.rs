//! Token and filename parsing rules shared by the registry and the
//! upload screen.

/// Longest extension token accepted for registration.
pub const MAX_EXTENSION_LENGTH: usize = 20;

/// Longest raw `extensions` input accepted in a single request.
pub const MAX_INPUT_LENGTH: u64 = 500;

/// Checks a normalized token against the `[a-z0-9]{1,20}` grammar.
pub fn is_valid_extension_token(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= MAX_EXTENSION_LENGTH
        && token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Checks the raw comma separated input before tokenization. Uppercase
/// letters pass here; normalization lowercases them before the grammar
/// check applies.
pub fn is_valid_extension_input(raw: &str) -> bool {
    raw.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ',' || c.is_ascii_whitespace())
}

/// Splits raw input on commas, trims and lowercases every piece and drops
/// empty leftovers. Duplicates survive; the registry decides their fate.
pub fn tokenize_extension_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Yields every dot separated segment of `filename` after the first one,
/// lowercased. A name without dots, or with nothing but dots, yields no
/// candidates. `report.exe.txt` yields `exe` and `txt`, so a blocked
/// extension cannot hide behind a harmless suffix.
pub fn candidate_extensions(filename: &str) -> impl Iterator<Item = String> + '_ {
    filename
        .split('.')
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase())
}
