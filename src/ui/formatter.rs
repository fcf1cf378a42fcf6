//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction.

use std::path::Path;

use crate::domain::Release;
use crate::warning::CheckWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a check warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The check warning to display
pub fn display_check_warning(warning: &CheckWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the proposed update.
///
/// Shows the installed version next to the newer release and where its
/// package comes from.
///
/// # Arguments
/// * `installed` - The currently installed version string
/// * `release` - The release selected as the update
pub fn display_proposed_update(installed: &str, release: &Release) {
    println!("\n\x1b[1mUpdate Available:\x1b[0m");
    println!("  Installed: \x1b[31m{}\x1b[0m", installed);
    println!("  Latest:    \x1b[32m{}\x1b[0m", release.version);
    println!("  Package:   {}", release.url);
}

/// Display the releases listed in the manifest.
///
/// # Arguments
/// * `releases` - Releases to display, in manifest order
pub fn display_available_releases(releases: &[Release]) {
    println!("\x1b[1mReleases in manifest:\x1b[0m");
    for release in releases {
        println!("  - {}  {}", release.version, release.url);
    }
}

/// Display the hand-off instruction for a downloaded package.
///
/// The installer is an external collaborator; release-check only tells the
/// user where the package landed.
///
/// # Arguments
/// * `path` - Path of the downloaded package file
pub fn display_manual_install_instruction(path: &Path) {
    println!(
        "\n\x1b[33m→\x1b[0m To install the update, open:\n  \x1b[36m{}\x1b[0m",
        path.display()
    );
}
