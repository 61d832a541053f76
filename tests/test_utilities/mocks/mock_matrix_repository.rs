use dep_matrix::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct MockState {
    dir_state: MatrixDirState,
    matrix: Option<DependencyMatrix>,
    saves: usize,
    markdown: Option<(String, String)>,
    locks_taken: usize,
    locks_held: usize,
    /// Locks held at the time of each save
    held_during_save: Vec<usize>,
}

/// In-memory MatrixRepository; clones share state so tests can inspect it
/// after handing the repository to a use case.
#[derive(Clone)]
pub struct MockMatrixRepository {
    state: Arc<Mutex<MockState>>,
}

/// Guard returned by [`MockMatrixRepository::acquire_lock`].
pub struct MockLockGuard {
    state: Arc<Mutex<MockState>>,
}

impl Drop for MockLockGuard {
    fn drop(&mut self) {
        self.state.lock().unwrap().locks_held -= 1;
    }
}

#[allow(dead_code)]
impl MockMatrixRepository {
    /// Tracking enabled, no `matrix.yaml` yet.
    pub fn new() -> Self {
        Self::with_state(MatrixDirState::Present, None)
    }

    pub fn with_matrix(matrix: DependencyMatrix) -> Self {
        Self::with_state(MatrixDirState::Present, Some(matrix))
    }

    pub fn with_dir_state(dir_state: MatrixDirState) -> Self {
        Self::with_state(dir_state, None)
    }

    fn with_state(dir_state: MatrixDirState, matrix: Option<DependencyMatrix>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                dir_state,
                matrix,
                saves: 0,
                markdown: None,
                locks_taken: 0,
                locks_held: 0,
                held_during_save: Vec::new(),
            })),
        }
    }

    pub fn matrix(&self) -> Option<DependencyMatrix> {
        self.state.lock().unwrap().matrix.clone()
    }

    pub fn saves(&self) -> usize {
        self.state.lock().unwrap().saves
    }

    pub fn markdown(&self) -> Option<(String, String)> {
        self.state.lock().unwrap().markdown.clone()
    }

    pub fn locks_taken(&self) -> usize {
        self.state.lock().unwrap().locks_taken
    }

    pub fn locks_held(&self) -> usize {
        self.state.lock().unwrap().locks_held
    }

    pub fn held_during_save(&self) -> Vec<usize> {
        self.state.lock().unwrap().held_during_save.clone()
    }
}

impl MatrixRepository for MockMatrixRepository {
    type Guard = MockLockGuard;

    fn matrix_dir_state(&self, _repo_dir: &Path) -> MatrixDirState {
        self.state.lock().unwrap().dir_state
    }

    fn acquire_lock(&self, _repo_dir: &Path) -> Result<MockLockGuard> {
        let mut state = self.state.lock().unwrap();
        state.locks_taken += 1;
        state.locks_held += 1;
        Ok(MockLockGuard {
            state: Arc::clone(&self.state),
        })
    }

    fn load_matrix(&self, _repo_dir: &Path) -> Result<Option<DependencyMatrix>> {
        Ok(self.state.lock().unwrap().matrix.clone())
    }

    fn save_matrix(&self, _repo_dir: &Path, matrix: &DependencyMatrix) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.matrix = Some(matrix.clone());
        state.saves += 1;
        let held = state.locks_held;
        state.held_during_save.push(held);
        Ok(())
    }

    fn write_markdown(&self, _repo_dir: &Path, file_name: &str, content: &str) -> Result<()> {
        self.state.lock().unwrap().markdown = Some((file_name.to_string(), content.to_string()));
        Ok(())
    }
}
