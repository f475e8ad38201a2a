//! Tests for the global configuration object.

use super::*;

#[test]
fn default_is_empty() {
    let config = GlobalConfig::default();
    assert_eq!(config.credentials, CredentialsConfig::default());
    assert!(config.region.is_none());
    assert!(config.interval.is_none());
    assert!(!config.debug);
    assert!(config.logfile.is_none());
    assert!(!config.omit_hostname);
    assert!(config.proxy.is_none());
}

#[test]
fn redacted_summary_hides_secrets() {
    let config = GlobalConfig {
        credentials: CredentialsConfig {
            access_key: Some("AKIAEXAMPLE1234".to_string()),
            secret_key: Some("super-secret".to_string()),
            token: Some("session-token".to_string()),
            role_arn: Some("arn:aws:iam::1:role/agent".to_string()),
            ..Default::default()
        },
        interval: Some(Duration::from_secs(60)),
        ..Default::default()
    };

    let summary = config.redacted_summary();
    let rendered = summary.to_string();
    assert!(!rendered.contains("super-secret"));
    assert!(!rendered.contains("session-token"));
    assert!(!rendered.contains("AKIAEXAMPLE1234"));
    assert_eq!(summary["credentials"]["access_key"], "****1234");
    assert_eq!(summary["credentials"]["role_arn"], "arn:aws:iam::1:role/agent");
    assert_eq!(summary["interval_secs"], 60);
}

#[test]
fn short_access_key_is_fully_masked() {
    let creds = CredentialsConfig {
        access_key: Some("abc".to_string()),
        ..Default::default()
    };
    assert_eq!(creds.redacted()["access_key"], "****");
}

#[test]
fn static_keys_need_both_halves() {
    let mut creds = CredentialsConfig {
        access_key: Some("ak".to_string()),
        ..Default::default()
    };
    assert!(!creds.has_static_keys());
    creds.secret_key = Some("sk".to_string());
    assert!(creds.has_static_keys());
}
