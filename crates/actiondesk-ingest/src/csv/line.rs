//! Single-line CSV tokenizer.

/// Splits one CSV line into fields.
///
/// A `"` toggles quoted mode and is never emitted; a comma outside quoted
/// mode ends the current field. There is no escape for a literal quote, and
/// an unterminated quote simply swallows the remaining commas. Fields are
/// returned untrimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

/// Trims whitespace and stray byte-order marks from both ends of a field.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
