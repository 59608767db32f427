use std::sync::Arc;

use crate::application::interface::storage::StorageClient;

/// Resolves stored avatar paths to browser-loadable URLs.
#[derive(Clone)]
pub struct AvatarLinks {
    storage: Arc<dyn StorageClient>,
    bucket: String,
}

impl AvatarLinks {
    pub fn new(storage: Arc<dyn StorageClient>, bucket: String) -> Self {
        Self { storage, bucket }
    }

    pub fn src(&self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        Some(self.storage.public_url(&self.bucket, path))
    }
}
