//! CLI unit tests

use pretty_assertions::assert_eq;
use rstest::*;

use research_service::cli::{DEFAULT_CONFIG_PATH, command};

#[rstest]
fn test_config_path_defaults_to_research_toml() {
    let matches = command()
        .try_get_matches_from(["research-service"])
        .unwrap();

    assert_eq!(
        matches.get_one::<String>("config").map(String::as_str),
        Some(DEFAULT_CONFIG_PATH)
    );
    assert!(!matches.get_flag("routes"));
}

#[rstest]
#[case::short("-c")]
#[case::long("--config")]
fn test_config_path_is_selectable(#[case] flag: &str) {
    let matches = command()
        .try_get_matches_from(["research-service", flag, "custom.toml"])
        .unwrap();

    assert_eq!(
        matches.get_one::<String>("config").map(String::as_str),
        Some("custom.toml")
    );
}

#[rstest]
fn test_routes_flag_is_recognized() {
    let matches = command()
        .try_get_matches_from(["research-service", "--routes"])
        .unwrap();

    assert!(matches.get_flag("routes"));

    // The listing itself must not panic.
    research_service::server::print_routes();
}

#[rstest]
fn test_unknown_flag_is_rejected() {
    assert!(
        command()
            .try_get_matches_from(["research-service", "--bogus"])
            .is_err()
    );
}
