//! Filesystem capabilities injected into the tree copier
//!
//! The copier is parameterized over this trait instead of calling the
//! filesystem directly, so tests can drive it against an in-memory fake.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// A filesystem entry discovered during a template walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Filesystem operations the tree copier needs.
///
/// `write` must create missing parent directories; creating a directory that
/// already exists is a no-op, so concurrent writers would not race on it.
#[allow(async_fn_in_trait)]
pub trait TemplateIo {
    /// Enumerate every entry at or under `root`, hidden entries included.
    /// The root itself is not listed. Fails if `root` is not a readable
    /// directory. Sibling order is unspecified.
    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>>;

    /// Read a template file as text
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write rendered output, creating intermediate directories
    async fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Add owner/group/other execute bits. No-op where the filesystem has no
    /// such concept.
    async fn set_executable(&self, path: &Path) -> Result<()>;
}

/// Real-filesystem implementation backed by `walkdir` and `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskIo;

impl TemplateIo for DiskIo {
    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>> {
        if !root.is_dir() {
            anyhow::bail!("Template directory not found: {}", root.display());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to walk template directory {}", root.display()))?;
            entries.push(TreeEntry {
                path: entry.path().to_path_buf(),
                is_dir: entry.file_type().is_dir(),
            });
        }
        Ok(entries)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read template {}", path.display()))
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    #[cfg(unix)]
    async fn set_executable(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(path, permissions)
            .await
            .with_context(|| format!("Failed to chmod {}", path.display()))
    }

    #[cfg(not(unix))]
    async fn set_executable(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
