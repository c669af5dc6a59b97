//! File-backed page store
//!
//! One `.txt` file per page under the data directory, contents equal to the
//! page body with no metadata. No locking and no atomic replace; concurrent
//! saves to the same title are last-write-wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Page file missing or unreadable. Callers treat both identically.
    #[error("page not found")]
    NotFound,
    #[error("failed to write page: {0}")]
    Io(#[from] io::Error),
}

/// The title+body unit of content, persisted as one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

/// Narrow key-value store over `<data_dir>/<title>.txt` files.
///
/// Titles are assumed to be already validated by the routing layer
/// (alphanumeric only); the store does no escaping of its own.
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn page_path(&self, title: &str) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Load a page by title. Any read failure collapses to `NotFound`.
    pub fn load(&self, title: &str) -> Result<Page, StoreError> {
        let body =
            fs::read_to_string(self.page_path(title)).map_err(|_| StoreError::NotFound)?;
        Ok(Page {
            title: title.to_string(),
            body,
        })
    }

    /// Write a page, creating the file or fully replacing its contents.
    ///
    /// Does not create the data directory; a missing directory surfaces as
    /// an `Io` error to the caller.
    pub fn save(&self, page: &Page) -> Result<(), StoreError> {
        write_owner_only(&self.page_path(&page.title), page.body.as_bytes())?;
        Ok(())
    }
}

/// Write a file created with owner read/write permissions only (0600)
#[cfg(unix)]
fn write_owner_only(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_owner_only(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}
