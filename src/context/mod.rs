use log::info;
use serde::Serialize;

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_authentication::CredentialWriter;
use crate::aws_files::{AwsPaths, DEFAULT_PROFILE};
use crate::aws_profiles::ProfileCatalog;
use crate::aws_region::RegionResolver;
use crate::tui::Prompt;

pub const NEW_PROFILE: &str = "new profile";

#[derive(Debug, Clone, Default)]
pub struct ContextParams {
    pub profile: Option<String>,
    pub region: Option<String>,
    pub description: String,
}

/// Profile and region of a context. An empty profile stands for the default profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwsContext {
    pub profile: String,
    pub region: String,
}

/// Interactive flow that picks or creates a profile and settles its region.
pub struct ContextCreateHelper<'a> {
    prompt: &'a dyn Prompt,
    paths: AwsPaths,
    region_suggestion: String,
}

impl<'a> ContextCreateHelper<'a> {
    pub fn new(prompt: &'a dyn Prompt, paths: AwsPaths) -> Self {
        ContextCreateHelper {
            prompt,
            paths,
            region_suggestion: String::new(),
        }
    }

    pub fn with_region_suggestion<S: Into<String>>(mut self, region: S) -> Self {
        self.region_suggestion = region.into();
        self
    }

    pub fn create_context_data(&self, params: ContextParams) -> AppResult<(AwsContext, String)> {
        let catalog = ProfileCatalog::discover(&self.paths)?;

        let profile = match params.profile.filter(|profile| !profile.is_empty()) {
            Some(profile) => validate_profile(&catalog, &profile)?,
            None => self.choose_profile(&catalog)?,
        };

        let region = match params.region.filter(|region| !region.is_empty()) {
            Some(region) => region,
            None => RegionResolver::new(self.paths.config_store()).resolve(
                self.prompt,
                &self.region_suggestion,
                &profile,
            )?,
        };

        Ok(create_context(profile, region, &params.description))
    }

    fn choose_profile(&self, catalog: &ProfileCatalog) -> AppResult<String> {
        let mut options = vec![NEW_PROFILE.to_string()];
        options.extend(catalog.names().iter().cloned());

        let selected = self.prompt.select("Select AWS Profile", &options)?;
        match selected {
            0 => self.new_profile(catalog),
            index => options.get(index).cloned().ok_or_else(|| {
                ApplicationError::Prompt(format!("no profile option at index {index}"))
            }),
        }
    }

    fn new_profile(&self, catalog: &ProfileCatalog) -> AppResult<String> {
        let suggestion = if catalog.contains(DEFAULT_PROFILE) {
            ""
        } else {
            DEFAULT_PROFILE
        };

        let name = self.prompt.input("profile name", suggestion)?.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::validation("profile name cannot be empty"));
        }

        info!("creating profile {name:?}");
        CredentialWriter::new(self.paths.credentials_store()).create_profile(self.prompt, &name)?;
        Ok(name)
    }
}

/// Known spelling of an explicitly requested profile.
fn validate_profile(catalog: &ProfileCatalog, profile: &str) -> AppResult<String> {
    if profile.eq_ignore_ascii_case(DEFAULT_PROFILE) {
        return Ok(DEFAULT_PROFILE.to_string());
    }

    catalog
        .find(profile)
        .map(str::to_string)
        .ok_or_else(|| ApplicationError::NotFound(format!("profile {profile:?}")))
}

pub fn create_context(
    profile: String,
    region: String,
    description: &str,
) -> (AwsContext, String) {
    let profile = if profile == DEFAULT_PROFILE {
        String::new()
    } else {
        profile
    };
    let description = format!("{description} ({region})").trim().to_string();

    (AwsContext { profile, region }, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_stored_empty() {
        let (context, description) =
            create_context("default".to_string(), "us-east-1".to_string(), "staging");

        assert_eq!(context.profile, "");
        assert_eq!(context.region, "us-east-1");
        assert_eq!(description, "staging (us-east-1)");
    }

    #[test]
    fn empty_description_is_trimmed() {
        let (context, description) =
            create_context("work".to_string(), "eu-central-1".to_string(), "");

        assert_eq!(context.profile, "work");
        assert_eq!(description, "(eu-central-1)");
    }

    #[test]
    fn unknown_explicit_profile_is_not_found() {
        let catalog: ProfileCatalog = ["work"].into_iter().collect();

        let err = validate_profile(&catalog, "alice").unwrap_err();
        assert_eq!(err.to_string(), "profile \"alice\": not found");
    }

    #[test]
    fn explicit_profile_takes_catalog_spelling() {
        let catalog: ProfileCatalog = ["work"].into_iter().collect();

        assert_eq!(validate_profile(&catalog, "Work").unwrap(), "work");
        assert_eq!(validate_profile(&catalog, "default").unwrap(), "default");
        assert_eq!(validate_profile(&catalog, "DEFAULT").unwrap(), "default");
    }
}
