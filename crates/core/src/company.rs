//! Company code generation.
//!
//! A company's `code` is a URL-safe slug derived from its display name at
//! creation time and immutable afterwards. The code doubles as the primary
//! key, so the same name always produces the same code.

/// Derive a company code from a display name.
///
/// Lowercases the name, turns whitespace runs into single hyphens, drops
/// every other non-alphanumeric character (non-ASCII included), collapses
/// consecutive hyphens, and trims leading/trailing hyphens.
pub fn code_from_name(name: &str) -> String {
    let mut code = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            code.push(c);
            prev_hyphen = false;
        } else if (c.is_whitespace() || c == '-') && !prev_hyphen {
            code.push('-');
            prev_hyphen = true;
        }
    }

    code.trim_matches('-').to_string()
}
