//! Header line extraction.

/// Splits `text` into its first line and the remaining data block.
///
/// The first line ends at `\n`, `\r` or `\r\n`; the terminator belongs to
/// neither part. Without a terminator the whole text is the header.
pub fn split_header(text: &str) -> (&str, &str) {
    let Some(end) = text.find(['\n', '\r']) else {
        return (text, "");
    };

    let rest = if text[end..].starts_with("\r\n") {
        &text[end + 2..]
    } else {
        &text[end + 1..]
    };

    (&text[..end], rest)
}

/// Splits a header line into column names on literal commas.
///
/// Quotes are not interpreted. A trailing comma would produce an empty
/// last name, which is dropped.
pub fn column_names(line: &str) -> Vec<String> {
    let mut names: Vec<String> = line.split(',').map(str::to_string).collect();
    if names.last().is_some_and(String::is_empty) {
        names.pop();
    }
    names
}
