//! Durable credential slot on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::{debug, error, warn};

use codeforge_core::{Credential, CredentialStore};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Name of the credential file inside the data directory.
const TOKEN_FILE: &str = "token";

/// Default credential file path.
pub fn default_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "codeforge").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join(TOKEN_FILE))
}

/// A credential slot backed by a single file.
///
/// The file is read once when the store is opened; afterwards the
/// in-memory copy is authoritative for reads and every write goes through
/// to disk. A failed delete still empties the in-memory slot.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    slot: RwLock<Option<Credential>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any credential already there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let slot = match fs::read_to_string(&path) {
            Ok(contents) => match Credential::new(contents) {
                Ok(credential) => Some(credential),
                Err(_) => {
                    warn!(path = %path.display(), "Ignoring empty credential file");
                    None
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read credential file {}", path.display())
                });
            }
        };

        debug!(path = %path.display(), present = slot.is_some(), "Opened credential store");

        Ok(Self {
            path,
            slot: RwLock::new(slot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the credential file. The new token lands under the final
    /// name only once it is fully written; on error nothing is left behind.
    fn write_file(&self, credential: &Credential) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let written = write_private(&temp_path, credential.as_str())
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written
    }
}

/// Write `contents` to a fresh file readable only by the owner (Unix).
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    // A stale file would keep its old mode.
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => return Err(err),
        _ => {}
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, credential: &Credential) -> codeforge_core::Result<()> {
        self.write_file(credential)?;
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;

        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed credential file"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                error!(path = %self.path.display(), error = %err, "Failed to remove credential file")
            }
        }
    }
}
