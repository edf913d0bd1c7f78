use chatlet_responder::config::{
    CredentialSource, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ResponderConfig,
    redacted_key_hint,
};
use chatlet_responder::error::ResponderError;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn defaults_apply_without_overrides() {
    let config = ResponderConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    assert!(matches!(
        config.credentials,
        CredentialSource::Env { ref var } if var == "CHATLET_API_KEY"
    ));
}

#[test]
fn overrides_are_applied() {
    let config = ResponderConfig::from_lookup(lookup(&[
        ("CHATLET_ENDPOINT", "http://localhost:9000/v1/completions"),
        ("CHATLET_MODEL", "tiny"),
        ("CHATLET_MAX_TOKENS", "32"),
        ("CHATLET_TEMPERATURE", "0.1"),
    ]))
    .unwrap();

    assert_eq!(config.endpoint, "http://localhost:9000/v1/completions");
    assert_eq!(config.model, "tiny");
    assert_eq!(config.max_tokens, 32);
    assert!((config.temperature - 0.1).abs() < f32::EPSILON);
}

#[test]
fn bad_numeric_override_is_a_config_error() {
    let err = ResponderConfig::from_lookup(lookup(&[("CHATLET_MAX_TOKENS", "lots")])).unwrap_err();
    assert!(matches!(err, ResponderError::Config(_)));
}

#[test]
fn unset_env_credential_is_missing() {
    let source = CredentialSource::Env {
        var: "CHATLET_TEST_UNSET_CREDENTIAL_VAR".to_string(),
    };
    let err = source.resolve().unwrap_err();
    assert!(matches!(
        err,
        ResponderError::MissingCredential { ref var } if var == "CHATLET_TEST_UNSET_CREDENTIAL_VAR"
    ));
}

#[test]
fn inline_credential_resolves() {
    let config = ResponderConfig::default().with_api_key("sk-test-1234567890");
    assert_eq!(config.credentials.resolve().unwrap(), "sk-test-1234567890");
    assert_eq!(config.credential_hint(), "sk-t...7890");
}

#[test]
fn empty_inline_credential_is_missing() {
    let config = ResponderConfig::default().with_api_key("");
    assert!(matches!(
        config.credentials.resolve(),
        Err(ResponderError::MissingCredential { .. })
    ));
}

#[test]
fn short_keys_are_fully_redacted() {
    assert_eq!(redacted_key_hint("abc"), "****");
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ResponderConfig = serde_json::from_str(
        r#"{"model":"custom","credentials":{"type":"inline","api_key":"k"}}"#,
    )
    .unwrap();
    assert_eq!(config.model, "custom");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert!(matches!(config.credentials, CredentialSource::Inline { .. }));
}
