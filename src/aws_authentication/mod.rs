use std::fmt;

use log::info;

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_files::{IniStore, SectionNaming};
use crate::tui::Prompt;

pub const ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";

const MIN_KEY_LENGTH: usize = 4;

/// Static access/secret key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    access_key_id: String,
    secret_access_key: String,
}

impl StaticCredentials {
    pub fn new<A: Into<String>, S: Into<String>>(
        access_key_id: A,
        secret_access_key: S,
    ) -> AppResult<Self> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();

        if access_key_id.chars().count() < MIN_KEY_LENGTH
            || secret_access_key.chars().count() < MIN_KEY_LENGTH
        {
            return Err(ApplicationError::validation(
                "AWS Access/Secret Access Key must have more than 3 characters",
            ));
        }

        Ok(StaticCredentials {
            access_key_id,
            secret_access_key,
        })
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

/// Writes new profiles into the shared credentials file without touching existing ones.
#[derive(Debug, Clone)]
pub struct CredentialWriter {
    store: IniStore,
}

impl CredentialWriter {
    pub fn new(store: IniStore) -> Self {
        CredentialWriter { store }
    }

    /// Asks for keys and stores them under `profile`. Declining leaves the file alone.
    pub fn create_profile(&self, prompt: &dyn Prompt, profile: &str) -> AppResult<()> {
        match Self::ask(prompt)? {
            Some(credentials) => self.save(profile, &credentials),
            None => {
                info!("no credentials stored for profile {profile:?}");
                Ok(())
            }
        }
    }

    pub fn ask(prompt: &dyn Prompt) -> AppResult<Option<StaticCredentials>> {
        if !prompt.confirm("Enter AWS credentials", false)? {
            return Ok(None);
        }

        let access_key_id = prompt.input("AWS Access Key ID", "")?;
        let secret_access_key = prompt.password("Enter AWS Secret Access Key")?;

        StaticCredentials::new(access_key_id, secret_access_key).map(Some)
    }

    /// Stored keys for `profile`.
    ///
    /// Fails with [`ApplicationError::MissingFile`] when the credentials file does not exist
    /// and [`ApplicationError::NotFound`] when the profile holds no complete key pair.
    pub fn retrieve(&self, profile: &str) -> AppResult<StaticCredentials> {
        let document = self.store.load()?;
        let section = SectionNaming::Verbatim.section_for(profile);

        let keys = document
            .get(&section, ACCESS_KEY_ID)
            .zip(document.get(&section, SECRET_ACCESS_KEY));

        match keys {
            Some((access_key_id, secret_access_key)) => Ok(StaticCredentials {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.to_string(),
            }),
            None => Err(ApplicationError::NotFound(format!(
                "credentials for profile {profile:?}"
            ))),
        }
    }

    pub fn save(&self, profile: &str, credentials: &StaticCredentials) -> AppResult<()> {
        match self.retrieve(profile) {
            Ok(_) => {
                return Err(ApplicationError::AlreadyExists(format!(
                    "credentials for profile {profile:?}"
                )));
            }
            Err(ApplicationError::MissingFile { .. }) => self.store.create_empty()?,
            Err(ApplicationError::NotFound(_)) => {}
            Err(err) => return Err(err),
        }

        let mut document = self.store.load()?;
        let section = SectionNaming::Verbatim.section_for(profile);
        document.set(&section, ACCESS_KEY_ID, credentials.access_key_id());
        document.set(&section, SECRET_ACCESS_KEY, credentials.secret_access_key());
        self.store.save(&document)?;

        info!(
            "stored credentials for profile {profile:?} in {}",
            self.store.path().display()
        );
        Ok(())
    }
}
