//! Keeps vendor response bodies and credentials out of logs in full.

/// Response bodies longer than this are cut in logs and error details.
const TRUNCATE_LIMIT: usize = 256;

/// Characters of a secret left visible by [`mask_secret`].
const VISIBLE_PREFIX: usize = 4;

/// Byte offset of the last char boundary at or before `index`.
fn char_boundary_before(s: &str, index: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= index)
        .last()
        .unwrap_or(0)
}

/// Cuts `s` to [`TRUNCATE_LIMIT`] bytes, noting the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = char_boundary_before(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Shows the first few characters of a credential, e.g. `LTAI****`.
///
/// Short secrets are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let visible_chars = secret.chars().count();
    if visible_chars <= VISIBLE_PREFIX * 2 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}
