use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use tracing::{info, warn};

use crate::adapter::supabase::client::{SupabaseSession, ensure_success};
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::storage::{StorageClient, UploadOptions};

pub struct SupabaseStorageClient {
    session: SupabaseSession,
}

impl SupabaseStorageClient {
    pub fn new(session: SupabaseSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl StorageClient for SupabaseStorageClient {
    async fn upload(&self, bucket: &str, path: &str, data: Bytes, options: &UploadOptions) -> AppResult<()> {
        let mut request = self
            .session
            .request(Method::POST, "/storage/v1/object")
            .header(CONTENT_TYPE, &options.content_type)
            .header(CACHE_CONTROL, format!("max-age={}", options.cache_control))
            .header("x-upsert", options.upsert.to_string())
            .body(data)
            .build()?;
        // Each key segment is percent-encoded so the stored key is exactly `path`.
        request
            .url_mut()
            .path_segments_mut()
            .map_err(|_| AppError::BackendError("Storage URL cannot carry an object key".to_string()))?
            .push(bucket)
            .extend(path.split('/'));
        let response = self.session.execute(request).await?;
        ensure_success(response)
            .await
            .inspect_err(|e| warn!("Storage upload error bucket={} path={}: {}", bucket, path, e))?;

        info!("Uploaded {}/{}", bucket, path);
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.session.public_base(), bucket, path)
    }
}
