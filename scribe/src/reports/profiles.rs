//! Profiles command report data structures.

use scribe_codegen::{ProfileInfo, ProfileSource};

use super::output::{Output, Report};

/// Report data listing transformer profiles.
#[derive(Debug)]
pub struct ProfilesReport {
    /// Profile the manifest selects.
    pub default_profile: String,
    pub profiles: Vec<ProfileInfo>,
}

impl Report for ProfilesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Default profile", &self.default_profile);
        out.newline();
        out.section("Profiles");

        for profile in &self.profiles {
            let source = match profile.source {
                ProfileSource::Builtin => "built-in",
                ProfileSource::Manifest => "scribe.toml",
            };
            let mut line = format!("{} ({})", profile.name, source);
            if let Some(description) = &profile.description {
                line.push_str(" - ");
                line.push_str(description);
            }
            out.list_item(&line);

            for (i, transformer) in profile.transformers.iter().enumerate() {
                out.numbered_item(i + 1, transformer);
            }
        }
    }
}
