use serde::Deserialize;

/// A published release: a version string paired with a package download URL.
///
/// The version is kept as the raw manifest string; it is parsed on demand
/// during selection so a malformed entry never poisons the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub version: String,
    pub url: String,
}

impl Release {
    /// Create a new release record
    pub fn new(version: impl Into<String>, url: impl Into<String>) -> Self {
        Release {
            version: version.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_new() {
        let release = Release::new("1.2.0", "https://example.com/pkg-1.2.0.zip");
        assert_eq!(release.version, "1.2.0");
        assert_eq!(release.url, "https://example.com/pkg-1.2.0.zip");
    }

    #[test]
    fn test_release_deserialize() {
        let release: Release =
            toml::from_str("version = \"1.2.0\"\nurl = \"https://example.com/pkg.zip\"").unwrap();
        assert_eq!(release, Release::new("1.2.0", "https://example.com/pkg.zip"));
    }
}
