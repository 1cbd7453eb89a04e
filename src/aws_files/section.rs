pub const DEFAULT_PROFILE: &str = "default";

const PROFILE_PREFIX: &str = "profile ";

/// How a shared AWS file names the section that belongs to a profile.
///
/// The credentials file uses the bare profile name. The config file keeps `default`
/// bare and prefixes every other profile with `profile `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionNaming {
    Verbatim,
    Prefixed,
}

impl SectionNaming {
    pub fn section_for(self, profile: &str) -> String {
        match self {
            SectionNaming::Prefixed if profile != DEFAULT_PROFILE => {
                format!("{PROFILE_PREFIX}{profile}")
            }
            _ => profile.to_string(),
        }
    }

    /// Profile a section belongs to, or `None` when the section is not a profile.
    pub fn profile_for(self, section: &str) -> Option<&str> {
        match self {
            SectionNaming::Verbatim => Some(section),
            SectionNaming::Prefixed if section == DEFAULT_PROFILE => Some(section),
            SectionNaming::Prefixed => section.strip_prefix(PROFILE_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_keeps_default_bare() {
        assert_eq!(SectionNaming::Prefixed.section_for("default"), "default");
        assert_eq!(SectionNaming::Prefixed.section_for("alice"), "profile alice");
    }

    #[test]
    fn credentials_file_never_prefixes() {
        assert_eq!(SectionNaming::Verbatim.section_for("alice"), "alice");
        assert_eq!(SectionNaming::Verbatim.profile_for("profile x"), Some("profile x"));
    }

    #[test]
    fn config_file_ignores_foreign_sections() {
        assert_eq!(SectionNaming::Prefixed.profile_for("profile bob"), Some("bob"));
        assert_eq!(SectionNaming::Prefixed.profile_for("default"), Some("default"));
        assert_eq!(SectionNaming::Prefixed.profile_for("sso-session corp"), None);
        assert_eq!(SectionNaming::Prefixed.profile_for("bob"), None);
    }

    #[test]
    fn translation_round_trips() {
        for profile in ["default", "alice", "team-prod"] {
            let section = SectionNaming::Prefixed.section_for(profile);
            assert_eq!(SectionNaming::Prefixed.profile_for(&section), Some(profile));
        }
    }
}
