use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Template selector understood by the notification collaborator, which
/// performs the variable substitution server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    StatusChange,
    WelcomeAdmin,
    Registration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub to: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub data: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification dispatch. Callers treat it as fire-and-forget: a
/// failed dispatch is logged, never surfaced to the initiating flow.
#[async_trait]
pub trait NotificationDispatch: Send + Sync {
    async fn dispatch(&self, request: NotificationRequest) -> Result<(), NotifyError>;
}
