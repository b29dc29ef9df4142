use super::*;

#[test]
fn deploy_host_takes_priority_over_site_url() {
    let config = SiteConfig {
        deploy_host: Some("gitfolio.example.app".to_owned()),
        site_url: Some("https://gitfolio.dev".to_owned()),
    };
    assert_eq!(config.base_url(), "https://gitfolio.example.app");
}

#[test]
fn site_url_used_when_no_deploy_host() {
    let config = SiteConfig {
        deploy_host: None,
        site_url: Some("https://gitfolio.dev".to_owned()),
    };
    assert_eq!(config.base_url(), "https://gitfolio.dev");
}

#[test]
fn local_fallback_when_nothing_configured() {
    let config = SiteConfig::default();
    assert_eq!(config.base_url(), LOCAL_FALLBACK_URL);
}
