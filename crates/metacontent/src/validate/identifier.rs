//! Module name syntax.

/// Returns true if `name` is usable as an Elm module name and constructor
/// suffix: an uppercase ASCII letter followed by ASCII letters, digits or `_`.
pub fn is_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
