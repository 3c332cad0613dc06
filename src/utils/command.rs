//! Command text parsing.
//!
//! Splits `/command arg1 arg2` style text into tokens.

/// Default command prefix.
pub const DEFAULT_PREFIX: char = '/';

/// Parse command and arguments from message text.
///
/// Returns all whitespace-separated tokens, the command being the first one.
/// Text that is empty or does not start with `/` yields an empty list.
pub fn parse_command(text: &str) -> Vec<&str> {
    parse_command_with_prefix(text, DEFAULT_PREFIX)
}

/// Same as [`parse_command`] with a custom prefix character.
pub fn parse_command_with_prefix(text: &str, prefix: char) -> Vec<&str> {
    if !text.starts_with(prefix) {
        return vec![];
    }
    text.split(is_separator).filter(|s| !s.is_empty()).collect()
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Get command arguments only (without the command itself).
pub fn get_command_args(text: &str) -> Vec<&str> {
    get_command_args_with_prefix(text, DEFAULT_PREFIX)
}

/// Same as [`get_command_args`] with a custom prefix character.
pub fn get_command_args_with_prefix(text: &str, prefix: char) -> Vec<&str> {
    let mut parts = parse_command_with_prefix(text, prefix);
    if parts.len() < 2 {
        return vec![];
    }
    parts.remove(0);
    parts
}

/// Bare command name: prefix and `@botname` suffix removed.
///
/// `/start@my_bot foo` → `start`.
pub fn command_name(text: &str, prefix: char) -> Option<&str> {
    let first = parse_command_with_prefix(text, prefix).into_iter().next()?;
    let name = first.strip_prefix(prefix)?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() { None } else { Some(name) }
}
