//! Site configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Relative OAuth callback URLs must be absolutized against the site's public
//! origin. The candidates are fixed at build time; pages receive the resolved
//! configuration through context instead of reading the environment ad hoc.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Origin used when neither a deployment host nor a site URL is configured.
pub const LOCAL_FALLBACK_URL: &str = "http://localhost:3000";

/// Priority-ordered candidates for the site's public base URL.
///
/// `deploy_host` is a bare hostname assigned by the hosting platform and is
/// always served over HTTPS. `site_url` is a full origin configured per
/// deployment. Empty values are treated as unset.
#[derive(Clone, Debug, Default)]
pub struct SiteConfig {
    pub deploy_host: Option<String>,
    pub site_url: Option<String>,
}

impl SiteConfig {
    /// Build the configuration from compile-time environment variables.
    ///
    /// Values are inlined into the WASM binary at build time, the same way
    /// the hosting platform exposes its public variables.
    pub fn from_build_env() -> Self {
        Self {
            deploy_host: option_env!("GITFOLIO_DEPLOY_HOST")
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
            site_url: option_env!("GITFOLIO_SITE_URL")
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
        }
    }

    /// Resolve the base URL from the candidate chain:
    /// deployment host, then configured site URL, then the local fallback.
    pub fn base_url(&self) -> String {
        if let Some(host) = &self.deploy_host {
            return format!("https://{host}");
        }
        self.site_url
            .clone()
            .unwrap_or_else(|| LOCAL_FALLBACK_URL.to_owned())
    }
}
