//! OAuth callback URL resolution.
//!
//! The auth provider needs an absolute URL to redirect back to after login.
//! Callers may hand us either a full URL or a site-relative path.

#[cfg(test)]
#[path = "callback_url_test.rs"]
mod callback_url_test;

use crate::config::SiteConfig;

/// Resolve a callback value into an absolute URL.
///
/// Values that already carry a scheme prefix pass through verbatim.
/// Relative values are joined to the configured base URL with exactly one
/// separating slash.
pub fn resolve_callback_url(config: &SiteConfig, callback: &str) -> String {
    if callback.starts_with("http") {
        return callback.to_owned();
    }
    let base = config.base_url();
    if callback.starts_with('/') {
        format!("{base}{callback}")
    } else {
        format!("{base}/{callback}")
    }
}
