//! User-adjustable settings, read once at startup.

pub mod purchase_prefs;
pub mod search_prefs;
pub mod user_prefs;

/// Looks up `key` in the process environment, falling back to the value baked
/// in at compile time. Browsers have no runtime environment, so the web build
/// only sees the baked values.
pub(crate) fn setting(key: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| baked.map(str::to_string))
        .filter(|v| !v.trim().is_empty())
}
