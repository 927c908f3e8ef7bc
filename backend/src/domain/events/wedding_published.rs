use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct WeddingPublished {
    pub wedding_id: Uuid,
    pub site_url: String,
}
