use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_files::IniDocument;

/// A single INI document on disk.
///
/// Loading a file that does not exist reports [`ApplicationError::MissingFile`] so callers
/// can decide between treating it as empty and failing. Saving always writes the whole
/// document back.
#[derive(Debug, Clone)]
pub struct IniStore {
    path: PathBuf,
    private: bool,
}

impl IniStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        IniStore {
            path: path.into(),
            private: false,
        }
    }

    /// Store whose file is readable by the owner only once saved.
    pub fn private<P: Into<PathBuf>>(path: P) -> Self {
        IniStore {
            path: path.into(),
            private: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<IniDocument> {
        let text = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ApplicationError::MissingFile {
                path: self.path.clone(),
            },
            _ => ApplicationError::Io(err),
        })?;

        let document = IniDocument::parse(text).map_err(|source| ApplicationError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "loaded {} ({} sections)",
            self.path.display(),
            document.sections().count()
        );
        Ok(document)
    }

    pub fn load_or_empty(&self) -> AppResult<IniDocument> {
        match self.load() {
            Err(ApplicationError::MissingFile { path }) => {
                debug!("{} does not exist, starting empty", path.display());
                Ok(IniDocument::default())
            }
            other => other,
        }
    }

    pub fn create_empty(&self) -> AppResult<()> {
        self.ensure_parent()?;
        fs::File::create(&self.path)?;
        self.restrict_permissions()?;
        debug!("created empty {}", self.path.display());
        Ok(())
    }

    pub fn save(&self, document: &IniDocument) -> AppResult<()> {
        self.ensure_parent()?;
        fs::write(&self.path, document.as_str())?;
        self.restrict_permissions()?;

        debug!(
            "saved {} ({} sections)",
            self.path.display(),
            document.sections().count()
        );
        Ok(())
    }

    fn ensure_parent(&self) -> AppResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
            _ => Ok(()),
        }
    }

    fn restrict_permissions(&self) -> AppResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            if self.private {
                let mut perms = fs::metadata(&self.path)?.permissions();
                perms.set_mode(0o600);
                fs::set_permissions(&self.path, perms)?;
            }
        }

        Ok(())
    }
}
