//! Integration tests for command helpers

use cricket_dash::{
    commands::resolve_site_url, scrape::DEFAULT_SITE_URL, CricketError, RecordKind,
    SITE_URL_ENV_VAR,
};

#[test]
fn test_resolve_site_url_from_flag() {
    let url = resolve_site_url(Some("http://stats.example.com".to_string()));
    assert_eq!(url, "http://stats.example.com");
}

#[test]
fn test_resolve_site_url_env_and_default() {
    // Env fallback and default in one test; the env var is process-global
    // and the test harness runs tests concurrently.
    std::env::remove_var(SITE_URL_ENV_VAR);
    assert_eq!(resolve_site_url(None), DEFAULT_SITE_URL);

    std::env::set_var(SITE_URL_ENV_VAR, "http://env.example.com");
    assert_eq!(resolve_site_url(None), "http://env.example.com");

    std::env::remove_var(SITE_URL_ENV_VAR);
}

#[test]
fn test_record_kind_parsing() {
    assert_eq!("matches".parse::<RecordKind>().unwrap(), RecordKind::Match);
    assert_eq!("match".parse::<RecordKind>().unwrap(), RecordKind::Match);
    assert_eq!("batting".parse::<RecordKind>().unwrap(), RecordKind::Batting);
    assert_eq!("Bowling".parse::<RecordKind>().unwrap(), RecordKind::Bowling);

    let err = "fielding".parse::<RecordKind>();
    assert!(matches!(err, Err(CricketError::InvalidKind { .. })));
}

#[test]
fn test_record_kind_table_names() {
    assert_eq!(RecordKind::Match.table(), "matches");
    assert_eq!(RecordKind::Batting.table(), "batting");
    assert_eq!(RecordKind::Bowling.table(), "bowling");
}
