use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content and was left untouched
    Unchanged,
}

/// A generated source file
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Output path for a template: `Index.cshtml` -> `Index.generated.cs`
    pub fn path_for_template(template: &Path, extension: &str) -> PathBuf {
        let stem = template
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        template.with_file_name(format!("{stem}.generated.{extension}"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file unless it already holds the same content.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path)
            && existing == self.content
        {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Index.generated.cs");

        let file = OutputFile::new(&path, "nested");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Index.generated.cs");

        let file = OutputFile::new(&path, "class Index {}");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Index.generated.cs");
        fs::write(&path, "old").unwrap();

        let file = OutputFile::new(&path, "new");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_path_for_template() {
        let path = OutputFile::path_for_template(Path::new("Views/Index.cshtml"), "cs");
        assert_eq!(path, PathBuf::from("Views/Index.generated.cs"));
    }
}
