use async_trait::async_trait;

/// A stored asset on the media CDN.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct MediaAsset {
    pub public_id: String,
    pub url: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<MediaAsset, String>;
    /// Deleting an asset that is already gone is not an error.
    async fn delete(&self, public_id: &str) -> Result<(), String>;
}
