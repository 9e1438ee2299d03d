//! Template rendering.
//!
//! # Responsibility
//! - Produce filled output from a body plus field values.
//! - Produce the cosmetic `<field>` preview form.
//!
//! # Invariants
//! - Replacement is a literal full-substring replace of `[field]`, so every
//!   occurrence of the same marker is rewritten when its field is processed.
//! - A field with no supplied value fills as the empty string.

use crate::fields::extract::extract_fields;
use std::collections::BTreeMap;

/// Renders a template body with the supplied field values.
///
/// Fields are processed in extraction order; each step replaces every
/// literal `[field]` occurrence in the text. Missing values substitute the
/// empty string rather than failing, matching the collaborating UI which
/// always supplies one value per extracted field.
pub fn render_filled(body: &str, values: &BTreeMap<String, String>) -> String {
    let mut rendered = body.to_string();
    for field in extract_fields(body) {
        let marker = format!("[{field}]");
        let value = values.get(&field).map(String::as_str).unwrap_or("");
        rendered = rendered.replace(&marker, value);
    }
    rendered
}

/// Renders the preview form of a template body, replacing each `[field]`
/// marker with `<field>` to highlight where input will be inserted.
pub fn render_preview(body: &str) -> String {
    let mut rendered = body.to_string();
    for field in extract_fields(body) {
        rendered = rendered.replace(&format!("[{field}]"), &format!("<{field}>"));
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::{render_filled, render_preview};
    use std::collections::BTreeMap;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fills_a_single_field() {
        assert_eq!(
            render_filled("Hi [name]!", &values(&[("name", "Ada")])),
            "Hi Ada!"
        );
    }

    #[test]
    fn fills_every_occurrence_of_a_repeated_field() {
        assert_eq!(
            render_filled("[a] and [a]", &values(&[("a", "x")])),
            "x and x"
        );
    }

    #[test]
    fn missing_value_fills_as_empty_string() {
        assert_eq!(render_filled("Hi [name]!", &BTreeMap::new()), "Hi !");
    }

    #[test]
    fn body_without_fields_is_unchanged() {
        assert_eq!(
            render_filled("plain text", &values(&[("name", "Ada")])),
            "plain text"
        );
    }

    #[test]
    fn prefix_field_name_does_not_touch_longer_marker() {
        let rendered = render_filled(
            "[name] / [name_full]",
            &values(&[("name", "Ada"), ("name_full", "Ada Lovelace")]),
        );
        assert_eq!(rendered, "Ada / Ada Lovelace");
    }

    #[test]
    fn preview_wraps_fields_in_angle_brackets() {
        assert_eq!(render_preview("Hi [name]!"), "Hi <name>!");
    }

    #[test]
    fn preview_of_a_preview_is_a_no_op() {
        let once = render_preview("Hi [name]!");
        assert_eq!(render_preview(&once), once);
    }

    #[test]
    fn preview_keeps_unterminated_bracket_text_literal() {
        assert_eq!(render_preview("keep [this"), "keep [this");
    }
}
