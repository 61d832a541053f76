use crate::matrix_tracking::domain::{
    DependencyMatrix, DEPENDENCY_MATRIX_DIR_NAME, DEPENDENCY_MATRIX_YAML_FILE_NAME,
};
use crate::ports::outbound::{MatrixDirState, MatrixRepository};
use crate::shared::error::MatrixError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use anyhow::Context;
use fs4::fs_std::FileExt;
use std::collections::hash_map::DefaultHasher;
use std::fs::{self, File, OpenOptions};
use std::hash::{Hash, Hasher};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Lock file name used inside a repository's `.git` directory.
pub const MATRIX_LOCK_FILE_NAME: &str = "dep-matrix.lock";

/// Exclusive advisory lock on a repository's matrix.
///
/// The lock file never lives in `dependency-matrix/`, which is committed:
/// it goes into `.git/` when the repository has one, otherwise into the
/// system temp directory under a name derived from the canonical repo path.
/// The lock is released when the guard is dropped.
#[derive(Debug)]
pub struct MatrixLock {
    file: File,
    path: PathBuf,
}

impl MatrixLock {
    pub fn lock_path(repo_dir: &Path) -> PathBuf {
        let git_dir = repo_dir.join(".git");
        if git_dir.is_dir() {
            return git_dir.join(MATRIX_LOCK_FILE_NAME);
        }

        let canonical = fs::canonicalize(repo_dir).unwrap_or_else(|_| repo_dir.to_path_buf());
        let mut hasher = DefaultHasher::new();
        canonical.hash(&mut hasher);
        std::env::temp_dir().join(format!("dep-matrix-{:016x}.lock", hasher.finish()))
    }

    fn acquire(repo_dir: &Path) -> Result<Self> {
        let path = Self::lock_path(repo_dir);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire lock: {}", path.display()))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MatrixLock {
    fn drop(&mut self) {
        #[allow(unstable_name_collisions)]
        if let Err(e) = self.file.unlock() {
            eprintln!("Warning: Failed to unlock {}: {}", self.path.display(), e);
        }
    }
}

/// FileSystemMatrixStore adapter persisting `dependency-matrix/matrix.yaml`
///
/// Saves go through a temporary file in the same directory that is renamed
/// over the target, so readers never observe a half-written matrix.
pub struct FileSystemMatrixStore;

impl FileSystemMatrixStore {
    pub fn new() -> Self {
        Self
    }

    pub fn matrix_dir(repo_dir: &Path) -> PathBuf {
        repo_dir.join(DEPENDENCY_MATRIX_DIR_NAME)
    }

    pub fn matrix_file(repo_dir: &Path) -> PathBuf {
        Self::matrix_dir(repo_dir).join(DEPENDENCY_MATRIX_YAML_FILE_NAME)
    }

    fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
        let write_error = |details: String| MatrixError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(content)
            .map_err(|e| write_error(e.to_string()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| write_error(e.to_string()))?;

        // Keep the mode of the file being replaced; new files stay 0600.
        if let Ok(metadata) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| write_error(e.to_string()))?;
        }

        temp.persist(path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

impl Default for FileSystemMatrixStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixRepository for FileSystemMatrixStore {
    type Guard = MatrixLock;

    fn matrix_dir_state(&self, repo_dir: &Path) -> MatrixDirState {
        match fs::metadata(Self::matrix_dir(repo_dir)) {
            Ok(metadata) if metadata.is_dir() => MatrixDirState::Present,
            Ok(_) => MatrixDirState::NotADirectory,
            Err(_) => MatrixDirState::Absent,
        }
    }

    fn acquire_lock(&self, repo_dir: &Path) -> Result<MatrixLock> {
        let matrix_dir = Self::matrix_dir(repo_dir);
        if matrix_dir.exists() && !matrix_dir.is_dir() {
            return Err(MatrixError::NotADirectory { path: matrix_dir }.into());
        }
        fs::create_dir_all(&matrix_dir).map_err(|e| MatrixError::FileWriteError {
            path: matrix_dir.clone(),
            details: e.to_string(),
        })?;
        MatrixLock::acquire(repo_dir)
    }

    fn load_matrix(&self, repo_dir: &Path) -> Result<Option<DependencyMatrix>> {
        // A file named `dependency-matrix` means tracking is off, not a broken matrix.
        if self.matrix_dir_state(repo_dir) == MatrixDirState::NotADirectory {
            return Ok(None);
        }

        let path = Self::matrix_file(repo_dir);
        match fs::symlink_metadata(&path) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(MatrixError::FileReadError {
                    path,
                    details: e.to_string(),
                }
                .into())
            }
            Ok(_) => {}
        }

        validate_regular_file(&path, "matrix")?;

        let content = fs::read_to_string(&path).map_err(|e| MatrixError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Some(DependencyMatrix::default()));
        }

        let matrix = serde_yaml_ng::from_str(&content).map_err(|e| MatrixError::ParseError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(Some(matrix))
    }

    fn save_matrix(&self, repo_dir: &Path, matrix: &DependencyMatrix) -> Result<()> {
        let path = Self::matrix_file(repo_dir);
        let data = serde_yaml_ng::to_string(matrix).map_err(|e| MatrixError::SerializeError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        fs::create_dir_all(Self::matrix_dir(repo_dir)).map_err(|e| {
            MatrixError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        Self::atomic_write(&path, data.as_bytes())
    }

    fn write_markdown(&self, repo_dir: &Path, file_name: &str, content: &str) -> Result<()> {
        let path = Self::matrix_dir(repo_dir).join(file_name);
        Self::atomic_write(&path, content.as_bytes())
    }
}
