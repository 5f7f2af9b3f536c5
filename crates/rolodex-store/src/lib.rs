//! # rolodex-store
//!
//! Flat-file JSON storage accessor for the rolodex contact service.
//!
//! The backing store is a single file holding the entire contact collection
//! as a JSON array. Every `load` reads and parses the whole file; every
//! `save` serializes and overwrites the whole file in one write. There is
//! no locking, no atomic rename, and no partial-write protection: two
//! concurrent read-modify-write cycles can race, with the second save
//! winning. That is the specified storage contract, not an oversight, so
//! this crate must not grow write guarantees.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use rolodex_core::{Contact, Error, Result};

/// Storage accessor for the contact collection.
///
/// Abstracting over the flat file keeps handlers testable against
/// alternative backends.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Read the entire collection, in file order.
    ///
    /// A missing backing file is an empty collection. A file that exists
    /// but does not parse as a JSON array of contacts is `Error::Corrupt`.
    async fn load(&self) -> Result<Vec<Contact>>;

    /// Serialize the entire collection and overwrite the backing file.
    async fn save(&self, contacts: &[Contact]) -> Result<()>;
}

/// JSON flat-file implementation of [`ContactStore`].
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file is not touched
    /// until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Contact>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "contact store: no backing file, empty collection");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let contacts: Vec<Contact> =
            serde_json::from_slice(&bytes).map_err(|e| Error::Corrupt(e.to_string()))?;
        debug!(path = %self.path.display(), count = contacts.len(), "contact store: load");
        Ok(contacts)
    }

    async fn save(&self, contacts: &[Contact]) -> Result<()> {
        let json = serde_json::to_vec(contacts)?;
        fs::write(&self.path, &json).await?;
        debug!(path = %self.path.display(), count = contacts.len(), "contact store: save");
        Ok(())
    }
}
