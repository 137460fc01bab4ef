//! Credential loading.
//!
//! The core only needs one capability from here: [`CredentialProvider::password`].
//! [`FileCredentials`] implements it on top of a small JSON file:
//!
//! ```json
//! { "password": "oauth:xxxxxxxxxxxxxxxx" }
//! ```
//!
//! An empty file or a missing `password` field means "no credentials set"
//! and yields an empty token. An unreadable file or malformed JSON is an
//! error.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Credential loading errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read credentials file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse credentials file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the authentication token.
pub trait CredentialProvider: Send + Sync {
    /// Return the token sent with `PASS`.
    fn password(&self) -> Result<String, CredentialError>;
}

/// Contents of the credentials file.
#[derive(Clone, Default, Deserialize)]
pub struct OAuthCred {
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for OAuthCred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCred")
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

impl OAuthCred {
    /// Decode the first JSON value in `content`.
    ///
    /// Trailing data after the first object is ignored.
    fn decode(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_str(content)
            .into_iter::<OAuthCred>()
            .next()
            .unwrap_or_else(|| Ok(OAuthCred::default()))
    }
}

/// Credentials read from a JSON file each time they are requested.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and decode the file.
    pub fn load(&self) -> Result<OAuthCred, CredentialError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| CredentialError::Read {
                path: self.path.clone(),
                source,
            })?;
        OAuthCred::decode(&content).map_err(|source| CredentialError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl CredentialProvider for FileCredentials {
    fn password(&self) -> Result<String, CredentialError> {
        Ok(self.load()?.password.unwrap_or_default())
    }
}

/// Fixed in-memory token.
#[derive(Clone)]
pub struct StaticCredentials(pub String);

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticCredentials(********)")
    }
}

impl CredentialProvider for StaticCredentials {
    fn password(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}
