use std::fmt;

/// Non-fatal conditions hit while checking for updates.
/// These should be reported to the user but never abort the check on their
/// own.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckWarning {
    /// Manifest loaded but lists no releases
    EmptyManifest { path: String },
    /// Release entry whose version string cannot be parsed
    MalformedRelease { version: String, reason: String },
    /// Selected release downloads over plain HTTP
    InsecureDownloadUrl { url: String },
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckWarning::EmptyManifest { path } => {
                write!(f, "Manifest '{}' lists no releases", path)
            }
            CheckWarning::MalformedRelease { version, reason } => {
                write!(f, "Cannot parse release version '{}': {}", version, reason)
            }
            CheckWarning::InsecureDownloadUrl { url } => {
                write!(f, "Download URL '{}' is not https", url)
            }
        }
    }
}
