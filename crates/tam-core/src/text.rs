//! Host-supplied text lookup.

/// Supplies human-readable strings for message keys.
///
/// The core owns no string tables. Keys are the English message strings
/// themselves; a localizing host maps them to its own catalog, while
/// [`PlainText`] passes them through with positional substitution.
pub trait TextProvider {
    /// Looks up `key`, substituting `%1`, `%2`, ... with `params`.
    fn translate(&self, key: &str, params: &[String]) -> String;

    /// Convenience for parameterless lookups.
    fn text(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// Pass-through provider that substitutes positional parameters into
/// the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextProvider for PlainText {
    fn translate(&self, key: &str, params: &[String]) -> String {
        let mut out = key.to_string();
        for (position, param) in params.iter().enumerate() {
            out = out.replace(&format!("%{}", position + 1), param);
        }
        out
    }
}
