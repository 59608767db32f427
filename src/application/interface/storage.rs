use async_trait::async_trait;
use bytes::Bytes;

use crate::application::app_error::AppResult;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    pub content_type: String,
    /// `max-age` in seconds.
    pub cache_control: u32,
    pub upsert: bool,
}

#[async_trait]
pub trait StorageClient: Send + Sync {
    async fn upload(&self, bucket: &str, path: &str, data: Bytes, options: &UploadOptions) -> AppResult<()>;
    fn public_url(&self, bucket: &str, path: &str) -> String;
}
