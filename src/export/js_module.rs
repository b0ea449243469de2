//! JavaScript module rendering for the keyboard manifest.
//!
//! The front-end imports `keyboards` from the generated module:
//!
//! ```text
//! export { keyboards };
//! let keyboards = [
//!   { name: 'kbd1', layout: [''], keymap: [], split: false, lpme: false },
//! ];
//! ```

use std::fmt::Write;

use crate::models::{Catalog, KeyboardRecord};

/// Renders the catalog as an ES module exporting `keyboards`.
#[must_use]
pub fn render_js_module(catalog: &Catalog) -> String {
    let mut out = String::from("export { keyboards };\nlet keyboards = [\n");

    for record in &catalog.keyboards {
        out.push_str("  ");
        out.push_str(&render_record(record));
        out.push_str(",\n");
    }

    out.push_str("];\n");
    out
}

/// Renders one record as a JavaScript object literal.
#[must_use]
pub fn render_record(record: &KeyboardRecord) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        out,
        "{{ name: {}, layout: {}, keymap: {}, split: {}, lpme: {} }}",
        js_string(&record.name),
        js_array(&record.layouts),
        js_array(&record.keymap),
        record.split,
        record.lpme
    );
    out
}

fn js_array(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| js_string(s)).collect();
    format!("[{}]", items.join(", "))
}

/// Single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(name: &str, layouts: &[&str], split: bool, lpme: bool) -> KeyboardRecord {
        let layouts: BTreeSet<String> = layouts.iter().map(|s| (*s).to_string()).collect();
        KeyboardRecord::new(name, layouts, split, lpme).unwrap()
    }

    #[test]
    fn test_render_record() {
        assert_eq!(
            render_record(&record("kbd1", &[""], false, false)),
            "{ name: 'kbd1', layout: [''], keymap: [], split: false, lpme: false }"
        );
        assert_eq!(
            render_record(&record("kbd2", &["iso", "", "ansi"], true, true)),
            "{ name: 'kbd2', layout: ['', 'ansi', 'iso'], keymap: [], split: true, lpme: true }"
        );
    }

    #[test]
    fn test_render_module() {
        let catalog = Catalog {
            keyboards: vec![
                record("kbd1", &[""], false, false),
                record("kbd2", &["ansi"], true, false),
            ],
            missing: vec![],
        };

        assert_eq!(
            render_js_module(&catalog),
            "export { keyboards };\n\
             let keyboards = [\n  \
             { name: 'kbd1', layout: [''], keymap: [], split: false, lpme: false },\n  \
             { name: 'kbd2', layout: ['ansi'], keymap: [], split: true, lpme: false },\n\
             ];\n"
        );
    }

    #[test]
    fn test_render_empty_module() {
        assert_eq!(
            render_js_module(&Catalog::default()),
            "export { keyboards };\nlet keyboards = [\n];\n"
        );
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string(r"a\b"), r"'a\\b'");
        assert_eq!(js_string("a\u{1}"), r"'a\u{1}'");
    }
}
