//! Profiles operation - list transformer profiles.

use scribe_codegen::ProfileRegistry;
use scribe_manifest::Manifest;

use crate::reports::ProfilesReport;

/// Collect the built-in and manifest profiles.
pub fn profiles(manifest: &Manifest) -> ProfilesReport {
    ProfilesReport {
        default_profile: manifest.generator.profile.clone(),
        profiles: ProfileRegistry::from_manifest(manifest).profiles(),
    }
}
