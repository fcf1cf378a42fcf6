use log::warn;

use crate::domain::{Release, Version};
use crate::error::Result;

/// Pick the single best update from a list of candidate releases.
///
/// A release qualifies when its version is strictly newer than the installed
/// version; among qualifying releases the highest version wins, and the first
/// one encountered is kept on an exact tie. The scan is a pure fold over the
/// input slice with no shared state.
///
/// A candidate whose version string fails to parse is skipped and logged at
/// warn level so manifest authors can spot malformed entries. A malformed
/// `installed` version is fatal: without a baseline no selection is possible.
///
/// # Arguments
/// * `installed` - Version string of the currently installed release
/// * `releases` - Candidate releases, in manifest order
///
/// # Returns
/// * `Ok(Some(Release))` - The best release strictly newer than `installed`
/// * `Ok(None)` - No release is newer than `installed`
/// * `Err` - If `installed` fails to parse
pub fn select_update(installed: &str, releases: &[Release]) -> Result<Option<Release>> {
    let installed = Version::parse(installed)?;

    let best = releases
        .iter()
        .fold(None::<(Version, &Release)>, |best, release| {
            let candidate = match Version::parse(&release.version) {
                Ok(version) => version,
                Err(e) => {
                    warn!(
                        "Skipping release with malformed version '{}': {}",
                        release.version, e
                    );
                    return best;
                }
            };

            if candidate <= installed {
                return best;
            }

            // Replace only on strictly greater; ties keep the first seen
            let replaces = match &best {
                Some((best_version, _)) => candidate > *best_version,
                None => true,
            };
            if replaces {
                Some((candidate, release))
            } else {
                best
            }
        });

    Ok(best.map(|(_, release)| release.clone()))
}
