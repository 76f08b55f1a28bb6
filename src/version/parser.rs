//! Line-oriented extraction of `key = "value"` pairs.

/// Return the quoted value of the first line containing `key`.
///
/// A line matches when it contains `key` anywhere. The value is the text
/// between the first two `"` after the first `=` on that line. Matching
/// lines without a complete quoted value are skipped.
pub fn extract_quoted_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.contains(key))
        .find_map(quoted_value_of_line)
}

fn quoted_value_of_line(line: &str) -> Option<String> {
    let (_, rhs) = line.split_once('=')?;
    let (_, after_open) = rhs.split_once('"')?;
    let (value, _) = after_open.split_once('"')?;
    Some(value.to_string())
}
