//! Field extraction scan.
//!
//! # Responsibility
//! - Produce the ordered field-name sequence referenced by a template body.
//!
//! # Invariants
//! - Duplicates are preserved in order of appearance.
//! - An unterminated `[` ends the scan; the remaining text yields no fields
//!   and no error.

/// Extracts the ordered sequence of field names from a template body.
///
/// A field is the text strictly between the next `[` and the next `]` after
/// it. The scan is a literal left-to-right pass, not a grammar: `[a[b]c]`
/// yields one field `a[b` and leaves `c]` as plain text, and `[]` yields an
/// empty field name.
///
/// # Contract
/// - Returns an empty vector for bodies without a complete bracket pair.
/// - Never errors; malformed bracket sequences degrade to "stop scanning".
pub fn extract_fields(body: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cursor = 0;

    while let Some(open) = body[cursor..].find('[') {
        let open = cursor + open;
        let Some(close) = body[open..].find(']') else {
            break;
        };
        let close = open + close;
        fields.push(body[open + 1..close].to_string());
        cursor = close + 1;
    }

    fields
}
