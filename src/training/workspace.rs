//! Scratch directory holding the intermediate artifacts of one run

use crate::io::error::{Result, TrainerError, WithPath};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix of scratch directory names
const WORKSPACE_PREFIX: &str = "tesstrain-";

/// Per-run scratch directory, deleted with everything in it when dropped
///
/// Dropping happens on both the success and the failure path, so no
/// intermediate file outlives the run that created it.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a scratch directory under the system temporary directory
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::FileSystem`] if the directory cannot be created
    pub fn create() -> Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Create a scratch directory under `parent`
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::FileSystem`] if the directory cannot be created
    pub fn create_in(parent: impl AsRef<Path>) -> Result<Self> {
        let parent = parent.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(parent)
            .with_path("create workspace", parent)?;
        Ok(Self { dir })
    }

    /// Directory the toolchain runs in
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Location of a named artifact inside the workspace
    pub fn artifact(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Location of a named artifact that `step` must have produced
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::MissingArtifact`] if the file does not exist
    pub fn require(&self, step: &'static str, name: &str) -> Result<PathBuf> {
        let path = self.artifact(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TrainerError::MissingArtifact { step, path })
        }
    }

    /// Rename an artifact produced by `step`
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::MissingArtifact`] if `from` does not exist and
    /// [`TrainerError::FileSystem`] if the rename fails
    pub fn rename(&self, step: &'static str, from: &str, to: &str) -> Result<PathBuf> {
        let source = self.require(step, from)?;
        let target = self.artifact(to);
        fs::rename(&source, &target).with_path("rename artifact", &source)?;
        Ok(target)
    }

    /// Names of all entries currently in the workspace, sorted
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::FileSystem`] if the directory cannot be listed
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.path()).with_path("list workspace", self.path())? {
            let entry = entry.with_path("list workspace", self.path())?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Delete every entry except `keep`, returning the names removed
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::FileSystem`] if an entry cannot be removed
    pub fn clean(&self, keep: &str) -> Result<Vec<String>> {
        let mut removed = Vec::new();
        for name in self.entries()? {
            if name == keep {
                continue;
            }
            let path = self.artifact(&name);
            if path.is_dir() {
                fs::remove_dir_all(&path).with_path("remove artifact", &path)?;
            } else {
                fs::remove_file(&path).with_path("remove artifact", &path)?;
            }
            removed.push(name);
        }
        Ok(removed)
    }
}

/// Copy a packaged artifact to `destination`, replacing any existing file
///
/// # Errors
///
/// Returns [`TrainerError::FileSystem`] if the copy fails
pub fn install(package: &Path, destination: &Path) -> Result<PathBuf> {
    fs::copy(package, destination).with_path("install trained data", destination)?;
    Ok(destination.to_path_buf())
}
