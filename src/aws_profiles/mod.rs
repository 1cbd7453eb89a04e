use log::debug;

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_files::{AwsPaths, SectionNaming};

/// Profile names visible across the shared credentials and config files.
///
/// Names are folded to lower case and kept once, in the order they are first seen:
/// credentials file sections first, then config file sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCatalog {
    names: Vec<String>,
}

impl ProfileCatalog {
    pub fn discover(paths: &AwsPaths) -> AppResult<Self> {
        let mut catalog = ProfileCatalog::default();
        let sources = [
            (paths.credentials_store(), SectionNaming::Verbatim),
            (paths.config_store(), SectionNaming::Prefixed),
        ];

        for (store, naming) in sources {
            let document = match store.load() {
                Ok(document) => document,
                Err(ApplicationError::MissingFile { path }) => {
                    debug!("skipping {}, file does not exist", path.display());
                    continue;
                }
                Err(err) => return Err(err),
            };

            for section in document.sections() {
                match naming.profile_for(section) {
                    Some(name) => catalog.insert(name),
                    None => debug!(
                        "ignoring section [{section}] in {}",
                        store.path().display()
                    ),
                }
            }
        }

        debug!("discovered {} profiles", catalog.len());
        Ok(catalog)
    }

    fn insert(&mut self, name: &str) {
        let name = name.to_lowercase();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.find(profile).is_some()
    }

    /// Catalog spelling of `profile`, matched regardless of case.
    pub fn find(&self, profile: &str) -> Option<&str> {
        let profile = profile.to_lowercase();
        self.names
            .iter()
            .find(|name| **name == profile)
            .map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ProfileCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut catalog = ProfileCatalog::default();
        for name in iter {
            catalog.insert(name.as_ref());
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_keeps_first_seen() {
        let catalog: ProfileCatalog = ["Work", "default", "WORK", "dev"].into_iter().collect();
        assert_eq!(catalog.names().to_vec(), ["work", "default", "dev"]);
    }

    #[test]
    fn membership_ignores_case() {
        let catalog: ProfileCatalog = ["Prod"].into_iter().collect();
        assert!(catalog.contains("prod"));
        assert!(catalog.contains("PROD"));
        assert!(!catalog.contains("staging"));
        assert_eq!(catalog.find("PROD"), Some("prod"));
    }
}
