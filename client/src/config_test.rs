use super::*;
use crate::page::submit::Endpoints;

#[test]
fn empty_object_uses_defaults() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn default_is_simulated_every_state() {
    let config = PageConfig::default();
    assert_eq!(config.submission, SubmissionStrategy::default());
    assert_eq!(config.decoration, DecorationPolicy::EveryState);
}

#[test]
fn parses_live_failures_only() {
    let config = PageConfig::from_json(r#"{"submission":{"mode":"live"},"decoration":"failures-only"}"#).unwrap();
    assert_eq!(config.submission, SubmissionStrategy::Live { endpoints: Endpoints::default() });
    assert_eq!(config.decoration, DecorationPolicy::FailuresOnly);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(PageConfig::from_json("{").is_err());
    assert!(PageConfig::from_json(r#"{"decoration":"sometimes"}"#).is_err());
}

#[test]
fn embedded_json_round_trips_and_escapes_tags() {
    let config = PageConfig {
        submission: SubmissionStrategy::Live {
            endpoints: Endpoints { login: "/</script>".to_owned(), ..Endpoints::default() },
        },
        decoration: DecorationPolicy::FailuresOnly,
    };
    let embedded = config.to_embedded_json();
    assert!(!embedded.contains('<'));
    assert_eq!(PageConfig::from_json(&embedded).unwrap(), config);
}

#[test]
fn load_outside_browser_is_default() {
    assert_eq!(PageConfig::load(), PageConfig::default());
}
