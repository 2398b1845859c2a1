//! Read-only lookup into a `document.cookie` style string.
//!
//! This is plain string splitting, not a cookie-grammar parser: a name that
//! appears more than once (or as the suffix of another `; `-delimited name)
//! yields no value at all.

/// Returns the value of `name` in `cookies`, or `None` when the name is absent
/// or occurs more than once.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let prefixed = format!("; {cookies}");
    let delimiter = format!("; {name}=");
    let mut parts = prefixed.split(delimiter.as_str());
    parts.next()?;
    let tail = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    tail.split(';').next().map(ToString::to_string)
}

/// Ambient cookie store.
pub trait CookieSource {
    /// The full cookie string; empty when the store is unavailable.
    fn cookie_string(&self) -> String;

    fn cookie(&self, name: &str) -> Option<String> {
        read_cookie(&self.cookie_string(), name)
    }
}
