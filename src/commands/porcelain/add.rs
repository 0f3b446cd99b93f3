use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage a file, or every file below a directory
    ///
    /// Returns the staged `(path, blob)` pairs in path order.
    pub fn add(&self, path: impl AsRef<Path>) -> Result<Vec<(String, ObjectId)>> {
        let path = path.as_ref();
        if !self.path().join(path).exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        self.ensure_initialized()?;

        let key = self.workspace().entry_key(path)?;
        let keys = if self.workspace().is_file(&key) {
            vec![key]
        } else {
            // the working-tree root has an empty key
            self.workspace()
                .list_files(Some(&key).filter(|key| !key.is_empty()).map(String::as_str))?
        };

        let mut index = self.index();
        index.rehydrate()?;

        let mut staged = Vec::with_capacity(keys.len());
        for key in keys {
            let content = self.workspace().read_file(&key)?;
            let blob_id = self.database().put_blob(content)?;

            tracing::debug!(path = %key, blob = %blob_id, "staged file");
            writeln!(
                self.writer(),
                "Added {} (blob: {})",
                key,
                blob_id.to_short_oid()
            )?;

            index.add(key.clone(), blob_id.clone());
            staged.push((key, blob_id));
        }

        index.write_updates()?;

        Ok(staged)
    }
}
