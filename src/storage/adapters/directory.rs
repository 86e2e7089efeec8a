//! Directory-backed implementation of the `KeyValueStore` port.
//!
//! Each key maps to one `<key>.json` file inside a capability-scoped
//! directory. Writes go to a temporary sibling first and are then renamed
//! into place so a crash never leaves a half-written value behind.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::storage::ports::{KeyValueStore, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store persisting one file per key.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self {
            root: path.to_owned(),
            dir,
        })
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Maps a storage key onto its file name, rejecting keys that would escape
/// the directory or collide with temporary files.
fn file_name_for(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = file_name_for(key)?;
        let temp_name = format!("{file_name}.{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(StorageError::backend)?;
        if let Err(err) = self.dir.rename(&temp_name, &self.dir, &file_name) {
            if let Err(cleanup) = self.dir.remove_file(&temp_name) {
                debug!(file = %temp_name, error = %cleanup, "failed to remove temporary value file");
            }
            return Err(StorageError::backend(err));
        }
        Ok(())
    }
}
