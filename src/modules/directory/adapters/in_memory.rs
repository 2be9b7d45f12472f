use crate::modules::directory::provisioning_port::{
    ProvisionError, ProvisionUserRequest, ProvisionUsers,
};
use crate::modules::tracking::adapters::outbound::store_in_memory::InMemoryTimeStore;
use crate::modules::tracking::core::catalog::UserProfile;
use std::sync::Arc;
use uuid::Uuid;

/// Creates profiles directly in the shared in-memory store, mirroring the
/// hosted collaborator's contract (duplicate email answers 400).
pub struct InMemoryProvisioner {
    store: Arc<InMemoryTimeStore>,
}

impl InMemoryProvisioner {
    pub fn new(store: Arc<InMemoryTimeStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ProvisionUsers for InMemoryProvisioner {
    async fn create_user(
        &self,
        request: ProvisionUserRequest,
    ) -> Result<UserProfile, ProvisionError> {
        if self.store.email_exists(&request.email).await {
            return Err(ProvisionError::Rejected {
                status: 400,
                error: "El email ya está registrado".into(),
            });
        }
        let profile = UserProfile {
            id: Uuid::now_v7().to_string(),
            nombre: request.nombre,
            apellido: request.apellido,
            email: request.email,
            role: request.role,
            permissions: Vec::new(),
        };
        self.store.seed_profile(profile.clone()).await;
        Ok(profile)
    }
}
