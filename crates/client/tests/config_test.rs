use std::path::PathBuf;
use std::time::Duration;

use courtbook_client::config::{ClientConfig, parse_log_level, parse_timeout};
use rstest::rstest;
use tracing::Level;

#[test]
fn test_defaults() {
    let config = ClientConfig::new("https://api.courtbook.test");

    assert_eq!(config.api_base_url, "https://api.courtbook.test");
    assert_eq!(config.request_timeout, 15);
    assert_eq!(config.timeout(), Duration::from_secs(15));
    assert_eq!(config.session_dir, PathBuf::from(".courtbook"));
    assert_eq!(config.log_level, Level::INFO);
}

#[rstest]
#[case("https://api.courtbook.test", "/bookings", "https://api.courtbook.test/bookings")]
#[case("https://api.courtbook.test/", "/bookings", "https://api.courtbook.test/bookings")]
#[case("https://api.courtbook.test/v1//", "bookings", "https://api.courtbook.test/v1/bookings")]
fn test_url_join(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
    assert_eq!(ClientConfig::new(base).url(path), expected);
}

#[rstest]
#[case("30", 30)]
#[case(" 5 ", 5)]
fn test_parse_timeout(#[case] raw: &str, #[case] expected: u64) {
    assert_eq!(parse_timeout(raw).unwrap(), expected);
}

#[rstest]
#[case("0")]
#[case("-1")]
#[case("soon")]
fn test_parse_timeout_rejects(#[case] raw: &str) {
    assert!(parse_timeout(raw).is_err());
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("chatty", Level::INFO)]
fn test_parse_log_level(#[case] raw: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(raw), expected);
}
