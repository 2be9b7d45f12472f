use crate::modules::tracking::core::entry::{EntryStatus, TimeEntry, duration_between};
use crate::modules::tracking::repository_port::{CatalogQueries, EntryRepository};
use crate::modules::tracking::use_cases::register_entry::command::RegisterEntry;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("project not found: {0}")]
    UnknownProject(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct RegisterEntryHandler<TStore>
where
    TStore: EntryRepository + CatalogQueries + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterEntryHandler<TStore>
where
    TStore: EntryRepository + CatalogQueries + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Derives `duration_minutes` from the interval and persists the entry
    /// as `pendiente`. The stored duration is never recomputed afterwards.
    pub async fn handle(&self, command: RegisterEntry) -> Result<TimeEntry, RegisterError> {
        let duration_minutes = duration_between(command.start_time, command.end_time)
            .ok_or(RegisterError::InvalidInterval)?;

        let project = self
            .store
            .project_by_id(&command.project_id)
            .await
            .map_err(|e| RegisterError::Unexpected(e.to_string()))?;
        if project.is_none() {
            return Err(RegisterError::UnknownProject(command.project_id));
        }

        let entry = TimeEntry {
            id: command.entry_id,
            user_id: command.user_id,
            project_id: command.project_id,
            date: command.date,
            start_time: command.start_time,
            end_time: command.end_time,
            duration_minutes,
            description: command.description,
            status: EntryStatus::Pendiente,
            processed_by: None,
            processed_at: None,
        };
        self.store
            .insert(entry.clone())
            .await
            .map_err(|e| RegisterError::Unexpected(e.to_string()))?;
        Ok(entry)
    }
}
