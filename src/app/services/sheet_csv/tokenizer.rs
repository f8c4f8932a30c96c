//! Quoted-field tokenization of single CSV lines
//!
//! The published export quotes any cell containing a comma and doubles
//! embedded quote characters. Rows are human-edited, so unbalanced quotes do
//! occur; the tokenizer never errors on them and treats the remaining text as
//! literal content.

/// Split one raw CSV line into an ordered sequence of trimmed fields
///
/// A `"` toggles the in-quotes state, except that `""` inside a quoted region
/// is consumed as a single literal quote. A `,` outside quotes terminates the
/// current field. The accumulated buffer is always pushed at end of line, so
/// the result is never empty. Field count may vary row to row; callers must
/// index defensively.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: consume both characters, emit one
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());

    // A field that started or ended exactly at a quote boundary can retain a
    // stray literal quote; strip one from each end.
    fields
        .into_iter()
        .map(|field| strip_boundary_quotes(&field))
        .collect()
}

/// Remove at most one leading and one trailing literal quote from a field
fn strip_boundary_quotes(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.to_string()
}
