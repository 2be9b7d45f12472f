use crate::modules::tracking::core::catalog::{Role, UserProfile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisionUserRequest {
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    pub role: Role,
    pub activo: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// Collaborator answered with a 4xx body `{error: string}`.
    #[error("{error}")]
    Rejected { status: u16, error: String },

    #[error("provisioning collaborator unavailable: {0}")]
    Unavailable(String),
}

/// User-provisioning collaborator. Role enforcement happens in the calling
/// handler; the collaborator still re-checks and may answer 403.
#[async_trait]
pub trait ProvisionUsers: Send + Sync {
    async fn create_user(&self, request: ProvisionUserRequest)
    -> Result<UserProfile, ProvisionError>;
}
