//! Working directory access
//!
//! Files are addressed by their working-tree key: the path relative to the
//! root, with `/` separators. The repository directory itself is never
//! listed, read or written through here.

use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Characters that would break the commit or index text formats
const FORBIDDEN_PATH_CHARS: [char; 4] = [',', '=', '\n', '\r'];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    /// Name of the repository directory, skipped everywhere
    ignored: String,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignored: impl Into<String>) -> Self {
        Workspace {
            path,
            ignored: ignored.into(),
        }
    }

    /// Turn a user-supplied path (absolute, or relative to the root) into a
    /// working-tree key
    pub fn entry_key(&self, path: &Path) -> Result<String> {
        let full_path = self.path.join(path);
        if !full_path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let full_path = full_path
            .canonicalize()
            .io_context(|| format!("Unable to resolve path {}", path.display()))?;
        let relative_path = full_path
            .strip_prefix(&self.path)
            .map_err(|_| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "outside the working tree".to_string(),
            })?;

        self.key_for(relative_path)
    }

    fn key_for(&self, relative_path: &Path) -> Result<String> {
        let invalid = |reason: &str| Error::InvalidPath {
            path: relative_path.to_path_buf(),
            reason: reason.to_string(),
        };

        let components = relative_path
            .components()
            .map(|component| match component {
                Component::Normal(name) => name
                    .to_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid("not valid UTF-8")),
                _ => Err(invalid("not a plain relative path")),
            })
            .collect::<Result<Vec<_>>>()?;

        if components.first().is_some_and(|first| *first == self.ignored) {
            return Err(invalid("inside the repository directory"));
        }

        let key = components.join("/");
        if key.contains(&FORBIDDEN_PATH_CHARS[..]) {
            return Err(invalid("file names may not contain ',', '=' or line breaks"));
        }

        Ok(key)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.strip_prefix(&self.path)
            .ok()
            .and_then(|relative| relative.components().next())
            .is_some_and(|first| first.as_os_str() == self.ignored.as_str())
    }

    /// Every regular file under `root_key` (or the whole tree), as sorted keys
    pub fn list_files(&self, root_key: Option<&str>) -> Result<Vec<String>> {
        let root_path = match root_key {
            Some(key) => self.path.join(key),
            None => self.path.to_path_buf(),
        };

        self.walk_files(&root_path)?
            .iter()
            .map(|relative_path| self.key_for(relative_path))
            .collect()
    }

    /// Every regular file in the tree, relative to the root, whatever its name
    pub fn list_paths(&self) -> Result<Vec<PathBuf>> {
        self.walk_files(&self.path)
    }

    fn walk_files(&self, root_path: &Path) -> Result<Vec<PathBuf>> {
        if !root_path.exists() {
            return Err(Error::FileNotFound(root_path.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root_path)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()))
        {
            let entry = entry.map_err(|e| Error::Io {
                context: format!("Unable to list {}", root_path.display()),
                source: e.into(),
            })?;

            if entry.file_type().is_file() {
                let relative_path = entry
                    .path()
                    .strip_prefix(&self.path)
                    .map_err(|_| Error::InvalidPath {
                        path: entry.path().to_path_buf(),
                        reason: "outside the working tree".to_string(),
                    })?;
                files.push(relative_path.to_path_buf());
            }
        }
        files.sort();

        Ok(files)
    }

    pub fn is_file(&self, key: &str) -> bool {
        self.path.join(key).is_file()
    }

    pub fn read_file(&self, key: &str) -> Result<Bytes> {
        let file_path = self.path.join(key);

        let content = std::fs::read(&file_path)
            .io_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    pub fn write_file(&self, key: &str, data: &[u8]) -> Result<()> {
        let file_path = self.path.join(key);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .io_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .io_context(|| format!("Unable to open file {}", file_path.display()))?;
        file.write_all(data)
            .io_context(|| format!("Unable to write file {}", file_path.display()))?;

        Ok(())
    }

    /// Delete a regular file; anything else at that path is left alone
    pub fn remove_file(&self, relative_path: impl AsRef<Path>) -> Result<()> {
        let file_path: PathBuf = self.path.join(relative_path);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .io_context(|| format!("Unable to remove file {}", file_path.display()))?;
        }

        Ok(())
    }
}
