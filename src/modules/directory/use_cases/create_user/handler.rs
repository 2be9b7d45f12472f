use crate::modules::directory::provisioning_port::{
    ProvisionError, ProvisionUserRequest, ProvisionUsers,
};
use crate::modules::directory::use_cases::create_user::command::CreateUser;
use crate::modules::notifications::port::{
    NotificationDispatch, NotificationRequest, NotificationType,
};
use crate::modules::tracking::core::catalog::UserProfile;
use crate::modules::tracking::repository_port::CatalogQueries;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("caller may not provision users")]
    Forbidden,

    #[error("{error}")]
    Rejected { status: u16, error: String },

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct CreateUserHandler<TCatalog, TProvisioner, TNotifier>
where
    TCatalog: CatalogQueries + 'static,
    TProvisioner: ProvisionUsers + 'static,
    TNotifier: NotificationDispatch + 'static,
{
    catalog: Arc<TCatalog>,
    provisioner: Arc<TProvisioner>,
    notifier: Arc<TNotifier>,
}

impl<TCatalog, TProvisioner, TNotifier> CreateUserHandler<TCatalog, TProvisioner, TNotifier>
where
    TCatalog: CatalogQueries + 'static,
    TProvisioner: ProvisionUsers + 'static,
    TNotifier: NotificationDispatch + 'static,
{
    pub fn new(
        catalog: Arc<TCatalog>,
        provisioner: Arc<TProvisioner>,
        notifier: Arc<TNotifier>,
    ) -> Self {
        Self {
            catalog,
            provisioner,
            notifier,
        }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<UserProfile, CreateUserError> {
        let caller = self
            .catalog
            .profile_by_id(&command.requested_by)
            .await
            .map_err(|e| CreateUserError::Unexpected(e.to_string()))?
            .ok_or(CreateUserError::Forbidden)?;
        if !caller.role.can_provision_users() {
            return Err(CreateUserError::Forbidden);
        }

        let created = self
            .provisioner
            .create_user(ProvisionUserRequest {
                email: command.email,
                password: command.password,
                nombre: command.nombre,
                apellido: command.apellido,
                role: command.role,
                activo: command.activo,
            })
            .await
            .map_err(|error| match error {
                ProvisionError::Rejected { status, error } => {
                    CreateUserError::Rejected { status, error }
                }
                ProvisionError::Unavailable(message) => CreateUserError::Unexpected(message),
            })?;

        let welcome = NotificationRequest {
            to: created.email.clone(),
            name: created.nombre.clone(),
            kind: NotificationType::WelcomeAdmin,
            data: serde_json::json!({
                "nombre": created.nombre,
                "email": created.email,
            }),
        };
        if let Err(error) = self.notifier.dispatch(welcome).await {
            tracing::warn!(%error, user_id = %created.id, "welcome notification failed");
        }
        Ok(created)
    }
}
