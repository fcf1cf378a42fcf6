use release_check::warning::CheckWarning;

// ============================================================================
// CheckWarning Display Tests
// ============================================================================

#[test]
fn test_check_warning_empty_manifest_display() {
    let warning = CheckWarning::EmptyManifest {
        path: "releases.toml".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("lists no releases"),
        "Message should contain 'lists no releases', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("releases.toml"),
        "Message should contain path 'releases.toml', got: {}",
        display_msg
    );
}

#[test]
fn test_check_warning_malformed_release_display() {
    let warning = CheckWarning::MalformedRelease {
        version: "bad-version".to_string(),
        reason: "Invalid format".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse release version"),
        "Message should contain 'Cannot parse release version', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("bad-version"),
        "Message should contain version 'bad-version', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("Invalid format"),
        "Message should contain reason 'Invalid format', got: {}",
        display_msg
    );
}

#[test]
fn test_check_warning_insecure_download_url_display() {
    let warning = CheckWarning::InsecureDownloadUrl {
        url: "http://example.com/pkg.zip".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("not https"),
        "Message should contain 'not https', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("http://example.com/pkg.zip"),
        "Message should contain the URL, got: {}",
        display_msg
    );
}

#[test]
fn test_check_warning_equality() {
    let a = CheckWarning::EmptyManifest {
        path: "releases.toml".to_string(),
    };
    let b = CheckWarning::EmptyManifest {
        path: "releases.toml".to_string(),
    };
    assert_eq!(a, b);

    let c = CheckWarning::EmptyManifest {
        path: "other.toml".to_string(),
    };
    assert_ne!(a, c);
}
