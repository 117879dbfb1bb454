//! Output persistence.
//!
//! Units are staged during a batch and become visible on `commit`.
//! `GeneratedFileManager` stages to `<file>.tmp` next to the destination and
//! renames on commit, so a batch that dies midway leaves the previous output
//! in place.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

/// I/O failure with the path it happened on.
#[derive(Debug, thiserror::Error)]
#[error("{action} `{}`: {source}", path.display())]
pub struct PersistError {
    pub action: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl PersistError {
    pub fn new(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Destination of generated units.
pub trait Persistence {
    /// Create `dir` and its parents.
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), PersistError>;

    /// Stage `contents` for `path` unless the file already holds it.
    /// Returns whether anything was staged.
    fn save_if_changed(&mut self, path: &Path, contents: &str) -> Result<bool, PersistError>;

    /// Publish everything staged since the last commit.
    fn commit(&mut self) -> Result<(), PersistError>;
}

/// On-disk persistence with temp files.
#[derive(Debug, Default)]
pub struct GeneratedFileManager {
    /// Final path -> staged temp path.
    pending: IndexMap<PathBuf, PathBuf>,
}

impl GeneratedFileManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.pending.keys().map(PathBuf::as_path)
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Persistence for GeneratedFileManager {
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), PersistError> {
        fs::create_dir_all(dir).map_err(|e| PersistError::new("failed to create directory", dir, e))
    }

    fn save_if_changed(&mut self, path: &Path, contents: &str) -> Result<bool, PersistError> {
        if !self.pending.contains_key(path)
            && fs::read_to_string(path).is_ok_and(|existing| existing == contents)
        {
            return Ok(false);
        }

        let temp = Self::temp_path(path);
        fs::write(&temp, contents).map_err(|e| PersistError::new("failed to write", &temp, e))?;
        self.pending.insert(path.to_path_buf(), temp);
        Ok(true)
    }

    fn commit(&mut self) -> Result<(), PersistError> {
        while let Some((path, temp)) = self.pending.shift_remove_index(0) {
            fs::rename(&temp, &path).map_err(|e| PersistError::new("failed to rename", &temp, e))?;
        }
        Ok(())
    }
}

/// In-memory persistence for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    files: IndexMap<PathBuf, String>,
    pending: IndexMap<PathBuf, String>,
    dirs: IndexSet<PathBuf>,
    unwritable: IndexSet<PathBuf>,
    commits: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_dir_all` fail for `dir`.
    pub fn fail_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unwritable.insert(dir.into());
        self
    }

    /// Committed files, in first-write order.
    pub fn files(&self) -> &IndexMap<PathBuf, String> {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.contains(dir.as_ref())
    }
}

impl Persistence for MemoryPersistence {
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), PersistError> {
        if self.unwritable.contains(dir) {
            return Err(PersistError::new(
                "failed to create directory",
                dir,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        self.dirs.insert(dir.to_path_buf());
        Ok(())
    }

    fn save_if_changed(&mut self, path: &Path, contents: &str) -> Result<bool, PersistError> {
        let current = self.pending.get(path).or_else(|| self.files.get(path));
        if current.is_some_and(|existing| existing == contents) {
            return Ok(false);
        }
        self.pending.insert(path.to_path_buf(), contents.to_string());
        Ok(true)
    }

    fn commit(&mut self) -> Result<(), PersistError> {
        self.commits += 1;
        for (path, contents) in self.pending.drain(..) {
            self.files.insert(path, contents);
        }
        Ok(())
    }
}
