use log::info;

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_files::{IniStore, SectionNaming};
use crate::tui::Prompt;

pub const REGION_KEY: &str = "region";

/// Reads and writes the region of a profile in the shared config file.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    store: IniStore,
}

impl RegionResolver {
    pub fn new(store: IniStore) -> Self {
        RegionResolver { store }
    }

    /// Prompts for the region of `profile` and saves the answer to its config section.
    ///
    /// A region already stored for the profile replaces `suggested` as the prompt default.
    pub fn resolve(
        &self,
        prompt: &dyn Prompt,
        suggested: &str,
        profile: &str,
    ) -> AppResult<String> {
        let mut document = self.store.load_or_empty()?;
        let section = SectionNaming::Prefixed.section_for(profile);

        let suggestion = document.get(&section, REGION_KEY).unwrap_or(suggested).to_string();
        let region = prompt.input("Region", &suggestion)?.trim().to_string();
        if region.is_empty() {
            return Err(ApplicationError::validation("region cannot be empty"));
        }

        if !document.has_section(&section) {
            info!(
                "adding section [{section}] to {}",
                self.store.path().display()
            );
        }
        document.set(&section, REGION_KEY, &region);
        self.store.save(&document)?;

        info!("region for profile {profile:?} set to {region}");
        Ok(region)
    }
}
