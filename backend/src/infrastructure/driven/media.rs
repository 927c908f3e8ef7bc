use async_trait::async_trait;
use shared::protocol::UploadPhotoRequest;

use crate::application::ports::{MediaAsset, MediaStore};

/// Client for the hosted media CDN. Assets are posted as JSON with a
/// base64 payload and addressed by the `public_id` the CDN assigns.
pub struct CdnMediaStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, thiserror::Error)]
enum MediaError {
    #[error("media request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("media service rejected the request ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl CdnMediaStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn upload_inner(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<MediaAsset, MediaError> {
        let body = UploadPhotoRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            data: data.to_vec(),
        };
        let response = self
            .client
            .post(format!("{}/assets", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected { status, body });
        }
        Ok(response.json().await?)
    }

    async fn delete_inner(&self, public_id: &str) -> Result<(), MediaError> {
        let response = self
            .client
            .delete(format!("{}/assets/{}", self.base_url, public_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        // Already gone counts as deleted.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(public_id, "asset already absent on delete");
            return Ok(());
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected { status, body });
        }
        Ok(())
    }
}

#[async_trait]
impl MediaStore for CdnMediaStore {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<MediaAsset, String> {
        self.upload_inner(filename, content_type, data)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, public_id: &str) -> Result<(), String> {
        self.delete_inner(public_id).await.map_err(|e| e.to_string())
    }
}
