use crate::areas::repository::Repository;
use crate::artifacts::diff::line_diff::{LineChange, line_diff};
use crate::errors::{Error, IoContext, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Compare two files line by line; works outside a repository too
    pub fn diff(&self, left: impl AsRef<Path>, right: impl AsRef<Path>) -> Result<Vec<LineChange>> {
        let left = self.read_diff_side(left.as_ref())?;
        let right = self.read_diff_side(right.as_ref())?;

        let changes = line_diff(&left, &right);

        if changes.is_empty() {
            writeln!(self.writer(), "Files are identical.")?;
        }
        for change in &changes {
            self.print_change(change)?;
        }

        Ok(changes)
    }

    fn read_diff_side(&self, path: &Path) -> Result<String> {
        let full_path = self.path().join(path);
        if !full_path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read(&full_path)
            .io_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    fn print_change(&self, change: &LineChange) -> Result<()> {
        writeln!(self.writer(), "{}", format!("Line {}:", change.line).cyan())?;
        if let Some(left) = &change.left {
            writeln!(self.writer(), "{}", format!("< {left}").red())?;
        }
        if let Some(right) = &change.right {
            writeln!(self.writer(), "{}", format!("> {right}").green())?;
        }

        Ok(())
    }
}
