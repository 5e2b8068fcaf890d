//! Shared string helpers for declaration generation.

/// Convert a kebab-case tag name to PascalCase (e.g., "my-button" -> "MyButton")
///
/// The input is lowercased first, so "MY-Button" also becomes "MyButton".
pub fn to_pascal_case(s: &str) -> String {
    s.to_lowercase()
        .split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Strip a trailing `.ts` or `.tsx` extension from a module path.
pub fn strip_ts_extension(path: &str) -> &str {
    path.strip_suffix(".tsx")
        .or_else(|| path.strip_suffix(".ts"))
        .unwrap_or(path)
}
