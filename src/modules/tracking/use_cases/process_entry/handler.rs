use crate::modules::notifications::port::{
    NotificationDispatch, NotificationRequest, NotificationType,
};
use crate::modules::tracking::core::entry::{EntryStatus, TimeEntry};
use crate::modules::tracking::repository_port::{CatalogQueries, EntryRepository};
use crate::modules::tracking::use_cases::process_entry::command::{ProcessAction, ProcessEntry};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("caller may not process entries")]
    Forbidden,

    #[error("time entry not found: {0}")]
    NotFound(String),

    #[error("only pending entries can be processed")]
    NotPending,

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct ProcessEntryHandler<TStore, TNotifier>
where
    TStore: EntryRepository + CatalogQueries + 'static,
    TNotifier: NotificationDispatch + 'static,
{
    store: Arc<TStore>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TNotifier> ProcessEntryHandler<TStore, TNotifier>
where
    TStore: EntryRepository + CatalogQueries + 'static,
    TNotifier: NotificationDispatch + 'static,
{
    pub fn new(store: Arc<TStore>, notifier: Arc<TNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Transitions a pending entry to approved/rejected and notifies its
    /// owner. The notification is fire-and-forget: a failed dispatch is
    /// logged and the approval still succeeds.
    pub async fn handle(&self, command: ProcessEntry) -> Result<TimeEntry, ProcessError> {
        let actor = self
            .store
            .profile_by_id(&command.processed_by)
            .await
            .map_err(|e| ProcessError::Unexpected(e.to_string()))?
            .ok_or(ProcessError::Forbidden)?;
        if !actor.role.can_process_entries() {
            return Err(ProcessError::Forbidden);
        }

        let mut entry = self
            .store
            .find_by_id(&command.entry_id)
            .await
            .map_err(|e| ProcessError::Unexpected(e.to_string()))?
            .ok_or_else(|| ProcessError::NotFound(command.entry_id.clone()))?;
        if entry.status != EntryStatus::Pendiente {
            return Err(ProcessError::NotPending);
        }

        entry.status = match command.action {
            ProcessAction::Aprobar => EntryStatus::Aprobado,
            ProcessAction::Rechazar => EntryStatus::Rechazado,
        };
        entry.processed_by = Some(command.processed_by.clone());
        entry.processed_at = Some(Utc::now());
        self.store
            .update(entry.clone())
            .await
            .map_err(|e| ProcessError::Unexpected(e.to_string()))?;

        self.notify_owner(&entry, command.reason.as_deref()).await;
        Ok(entry)
    }

    async fn notify_owner(&self, entry: &TimeEntry, reason: Option<&str>) {
        let owner = match self.store.profile_by_id(&entry.user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::warn!(user_id = %entry.user_id, "entry owner has no profile, skipping notification");
                return;
            }
            Err(error) => {
                tracing::warn!(%error, "owner lookup failed, skipping notification");
                return;
            }
        };
        let request = NotificationRequest {
            to: owner.email.clone(),
            name: owner.nombre.clone(),
            kind: NotificationType::StatusChange,
            data: serde_json::json!({
                "nombre": owner.nombre,
                "email": owner.email,
                "estado": entry.status.label(),
                "reason": reason.unwrap_or(""),
            }),
        };
        if let Err(error) = self.notifier.dispatch(request).await {
            tracing::warn!(%error, entry_id = %entry.id, "status notification failed");
        }
    }
}
