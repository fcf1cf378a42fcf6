// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_release_check_help() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "release-check", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-check"));
    assert!(stdout.contains("Check a releases manifest"));
}

#[test]
fn test_release_check_version() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "release-check", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-check"));
}

#[test]
fn test_config_loading() {
    use release_check::config::load_config;

    // Test with no config file (should use defaults)
    let config = load_config(None).expect("Should load default config");
    assert_eq!(config.manifest, "releases.toml");
}

#[test]
fn test_version_comparison() {
    use release_check::domain::compare;
    use std::cmp::Ordering;

    assert_eq!(compare("1.2", "1.2.0").unwrap(), Ordering::Equal);
    assert_eq!(compare("1.2.0.1", "1.2.0.2").unwrap(), Ordering::Less);
    assert_eq!(compare("1.3.0-alpha2", "1.3.0").unwrap(), Ordering::Less);
    assert_eq!(compare("2.0", "1.9.9.9").unwrap(), Ordering::Greater);
}

#[test]
fn test_selection_over_release_list() {
    use release_check::domain::Release;
    use release_check::selector::select_update;

    let releases = vec![
        Release::new("2.0.0", "u1"),
        Release::new("2.0.0", "u2"),
    ];

    // Tie-break keeps the first release encountered
    let selected = select_update("1.0.0", &releases).unwrap().unwrap();
    assert_eq!(selected.url, "u1");
}
