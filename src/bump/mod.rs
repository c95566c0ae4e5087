pub mod prompt;
pub mod readme;
pub mod remote;
pub mod slug;
pub mod update;

use regex::Regex;

pub const README_FILE: &str = "readme.txt";

/// Matches a `Name: value` header line, as found in readme.txt and in the
/// docblock of a plugin file (` * Name: value`). Captures `prefix` (everything up
/// to the value) and `value` (the first non-blank token).
pub fn header_field_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?im)^(?P<prefix>[ \t/*#@]*{}:[ \t]*)(?P<value>\S*)",
        regex::escape(name)
    ))
}
