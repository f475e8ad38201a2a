//! End-to-end translation of realistic agent sections through the public API.

use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;

use agentcfg_core::{CredentialSet, CredentialSource, Node, ProcessContext, RunMode, TargetOs, DEFAULT_ROLE};
use agentcfg_translator::{
    GlobalConfig, RuleError, RuleKind, RuleRegistry, TranslateError, TranslateOptions, Translator,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

const ON_PREM_AGENT_YAML: &str = r#"
metrics_collection_interval: 10
region: us-gov-west-1
logfile: ""
omit_hostname: true
credentials:
  role_arn: arn:aws:iam::123456789012:role/cw-agent
proxy:
  address: http://proxy.corp:8080
  no_proxy: [169.254.169.254, localhost]
"#;

fn on_prem_windows_context() -> ProcessContext {
    ProcessContext::builder()
        .mode(RunMode::OnPremise)
        .target_os(TargetOs::Windows)
        .region(Some("us-east-1".to_string()))
        .credential(
            DEFAULT_ROLE,
            CredentialSource::SharedFile {
                path: r"C:\Users\Administrator\.aws\credentials".to_string(),
                profile: None,
                role_arn: None,
            },
        )
        .build()
}

#[test]
fn sample_credentials_section_sets_role_arn() {
    init_tracing();
    let ctx = ProcessContext::builder()
        .credential(DEFAULT_ROLE, CredentialSource::Explicit(CredentialSet::default()))
        .build();
    let input = r#"{ "credentials" : {"access_key":"metric_ak", "secret_key":"metric_sk", "token": "dummy_token", "profile": "dummy_profile", "role_arn": "role_value"}}"#;

    let config = Translator::new(&ctx).translate_json(input).unwrap();

    assert_eq!(config.credentials.role_arn.as_deref(), Some("role_value"));
    assert_eq!(config.credentials.access_key.as_deref(), Some("metric_ak"));
    assert_eq!(config.credentials.secret_key.as_deref(), Some("metric_sk"));
    assert_eq!(config.credentials.token.as_deref(), Some("dummy_token"));
    assert_eq!(config.credentials.profile.as_deref(), Some("dummy_profile"));
}

#[test]
fn on_premise_windows_agent_from_yaml() {
    init_tracing();
    let ctx = on_prem_windows_context();
    let root = Node::from_yaml_str(ON_PREM_AGENT_YAML).unwrap();

    let config = Translator::new(&ctx).translate(&root).unwrap();
    config.log_summary();

    assert_eq!(config.interval, Some(Duration::from_secs(10)));
    assert_eq!(config.region.as_deref(), Some("us-gov-west-1"));
    assert!(config.omit_hostname);
    assert_eq!(
        config.logfile,
        Some(PathBuf::from(
            r"C:\ProgramData\Amazon\AmazonCloudWatchAgent\Logs\amazon-cloudwatch-agent.log"
        ))
    );
    assert_eq!(
        config.credentials.role_arn.as_deref(),
        Some("arn:aws:iam::123456789012:role/cw-agent")
    );
    assert_eq!(
        config.credentials.shared_credential_file.as_deref(),
        Some(r"C:\Users\Administrator\.aws\credentials")
    );
    assert_eq!(config.credentials.profile.as_deref(), Some("AmazonCloudWatchAgent"));

    let proxy = config.proxy.as_ref().unwrap();
    assert_eq!(proxy.address, "http://proxy.corp:8080");
    assert_eq!(proxy.no_proxy, vec!["169.254.169.254", "localhost"]);
}

#[test]
fn first_failing_rule_aborts_the_run() {
    init_tracing();
    let ctx = ProcessContext::default();
    let input = r#"{"region": 12, "debug": "verbose"}"#;

    let err = Translator::new(&ctx).translate_json(input).unwrap_err();
    match err {
        TranslateError::Rule { rule, source } => {
            assert_eq!(rule, "region");
            assert!(matches!(source, RuleError::InvalidValue { .. }));
        }
        other => panic!("expected rule error, got {other:?}"),
    }
}

#[test]
fn custom_order_is_respected() {
    init_tracing();
    let ctx = ProcessContext::default();
    let registry = RuleRegistry::empty()
        .register(RuleKind::Debug)
        .and_then(|r| r.register(RuleKind::Region))
        .unwrap();
    let input = r#"{"region": 12, "debug": "verbose"}"#;

    let err = Translator::new(&ctx)
        .with_registry(registry)
        .translate_json(input)
        .unwrap_err();
    assert!(matches!(err, TranslateError::Rule { rule: "debug", .. }));
}

#[test]
fn strict_mode_catches_typos_before_rules_run() {
    init_tracing();
    let ctx = ProcessContext::default();
    let translator = Translator::new(&ctx).with_options(TranslateOptions {
        reject_unknown_keys: true,
    });

    let err = translator
        .translate_json(r#"{"regoin": "us-east-1", "debug": "not-a-bool"}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnknownKey { ref suggestion, .. } if suggestion.as_deref() == Some("region")
    ));
}

#[test]
fn independent_runs_share_one_context_across_threads() {
    init_tracing();
    let ctx = on_prem_windows_context();
    let root = Node::from_yaml_str(ON_PREM_AGENT_YAML).unwrap();
    let expected = Translator::new(&ctx).translate(&root).unwrap();

    let results: Vec<GlobalConfig> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Translator::new(&ctx).translate(&root).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for config in results {
        assert_eq!(config, expected);
    }
}
