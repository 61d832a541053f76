use dep_matrix::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock UpdatesAssetReader serving canned `dependency-updates.yaml` assets
#[derive(Default, Clone)]
pub struct MockAssetReader {
    assets: HashMap<String, DependencyUpdates>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockAssetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, location: &str, updates: DependencyUpdates) -> Self {
        self.assets.insert(location.to_string(), updates);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl UpdatesAssetReader for MockAssetReader {
    fn read_updates(&self, location: &str) -> Result<DependencyUpdates> {
        self.requested.lock().unwrap().push(location.to_string());
        self.assets.get(location).cloned().ok_or_else(|| {
            MatrixError::AssetFetchError {
                location: location.to_string(),
                details: "not found".to_string(),
            }
            .into()
        })
    }
}
