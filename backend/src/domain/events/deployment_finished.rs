use uuid::Uuid;

use crate::domain::entities::DeploymentStatus;

#[derive(Debug, Clone)]
pub struct DeploymentFinished {
    pub wedding_id: Uuid,
    pub status: DeploymentStatus,
}
