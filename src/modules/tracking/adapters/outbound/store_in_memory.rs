use crate::modules::reporting::core::rows::{ProjectEntryRow, ReportRow};
use crate::modules::reporting::queries_port::{ExecutiveReportFilter, ReportQueries};
use crate::modules::tracking::core::catalog::{
    Client, Project, Role, System, UserProfile, WorkFront,
};
use crate::modules::tracking::core::entry::{EntryStatus, TimeEntry};
use crate::modules::tracking::repository_port::{CatalogQueries, EntryRepository};
use crate::shared::core::calendar::DateRange;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// One mutex-guarded dataset standing in for the hosted relational store.
/// Implements the entry repository, the catalog lookups and the report
/// queries, performing the joins the hosted backend would.
#[derive(Default)]
pub struct InMemoryTimeStore {
    entries: Mutex<Vec<TimeEntry>>,
    projects: Mutex<Vec<Project>>,
    clients: Mutex<Vec<Client>>,
    systems: Mutex<Vec<System>>,
    profiles: Mutex<Vec<UserProfile>>,
}

impl InMemoryTimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_project(&self, project: Project) {
        self.projects.lock().await.push(project);
    }

    pub async fn seed_client(&self, client: Client) {
        self.clients.lock().await.push(client);
    }

    pub async fn seed_system(&self, system: System) {
        self.systems.lock().await.push(system);
    }

    pub async fn seed_profile(&self, profile: UserProfile) {
        self.profiles.lock().await.push(profile);
    }

    pub async fn email_exists(&self, email: &str) -> bool {
        self.profiles.lock().await.iter().any(|p| p.email == email)
    }

    /// Joins one entry with its denormalized display names. Broken joins
    /// stay `None`; the builders substitute the placeholder.
    async fn join_row(&self, entry: &TimeEntry) -> ReportRow {
        let projects = self.projects.lock().await;
        let project = projects.iter().find(|p| p.id == entry.project_id);

        let client_name = match project {
            Some(p) => {
                let clients = self.clients.lock().await;
                clients
                    .iter()
                    .find(|c| c.id == p.client_id)
                    .map(|c| c.nombre.clone())
            }
            None => None,
        };
        let system_name = match project.and_then(|p| p.system_id.as_deref()) {
            Some(system_id) => {
                let systems = self.systems.lock().await;
                systems
                    .iter()
                    .find(|s| s.id == system_id)
                    .map(|s| s.nombre.clone())
            }
            None => None,
        };
        let profiles = self.profiles.lock().await;
        let manager_name = project
            .and_then(|p| p.manager_id.as_deref())
            .and_then(|manager_id| profiles.iter().find(|u| u.id == manager_id))
            .map(|u| u.display_name());
        let consultant_name = profiles
            .iter()
            .find(|u| u.id == entry.user_id)
            .map(|u| u.display_name());

        ReportRow {
            entry_id: entry.id.clone(),
            user_id: entry.user_id.clone(),
            project_id: entry.project_id.clone(),
            date: entry.date,
            duration_minutes: entry.duration_minutes,
            status: entry.status,
            project_name: project.map(|p| p.nombre.clone()),
            client_name,
            system_name,
            manager_name,
            consultant_name,
            work_front: project.and_then(|p| p.work_front),
        }
    }

    async fn joined_rows_in_range(&self, range: DateRange) -> Vec<ReportRow> {
        let entries: Vec<TimeEntry> = {
            let guard = self.entries.lock().await;
            guard
                .iter()
                .filter(|e| range.contains(e.date))
                .cloned()
                .collect()
        };
        let mut rows = Vec::with_capacity(entries.len());
        for entry in &entries {
            rows.push(self.join_row(entry).await);
        }
        rows
    }
}

#[async_trait]
impl EntryRepository for InMemoryTimeStore {
    async fn insert(&self, entry: TimeEntry) -> anyhow::Result<()> {
        self.entries.lock().await.push(entry);
        Ok(())
    }

    async fn find_by_id(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntry>> {
        Ok(self
            .entries
            .lock()
            .await
            .iter()
            .find(|e| e.id == entry_id)
            .cloned())
    }

    async fn update(&self, entry: TimeEntry) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().await;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(stored) => {
                *stored = entry;
                Ok(())
            }
            None => anyhow::bail!("time entry not found: {}", entry.id),
        }
    }
}

#[async_trait]
impl CatalogQueries for InMemoryTimeStore {
    async fn project_by_id(&self, project_id: &str) -> anyhow::Result<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .await
            .iter()
            .find(|p| p.id == project_id)
            .cloned())
    }

    async fn profile_by_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .await
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn managers(&self) -> anyhow::Result<Vec<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .await
            .iter()
            .filter(|u| u.role == Role::Gerente)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReportQueries for InMemoryTimeStore {
    async fn executive_rows(
        &self,
        filter: &ExecutiveReportFilter,
    ) -> anyhow::Result<Vec<ReportRow>> {
        let rows = self.joined_rows_in_range(filter.range).await;
        let projects = self.projects.lock().await;
        Ok(rows
            .into_iter()
            .filter(|row| {
                let project = projects.iter().find(|p| p.id == row.project_id);
                let client_ok = match &filter.client_ids {
                    Some(ids) => {
                        project.is_some_and(|p| ids.iter().any(|id| *id == p.client_id))
                    }
                    None => true,
                };
                let system_ok = match &filter.system_ids {
                    Some(ids) => project
                        .and_then(|p| p.system_id.as_deref())
                        .is_some_and(|sid| ids.iter().any(|id| id == sid)),
                    None => true,
                };
                // Filtering matches the display bucket, so `Otro` also
                // captures rows with no work front.
                let front_ok = match filter.work_front {
                    Some(front) => row.work_front.unwrap_or(WorkFront::Otro) == front,
                    None => true,
                };
                client_ok && system_ok && front_ok
            })
            .collect())
    }

    async fn manager_rows(
        &self,
        manager_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<ReportRow>> {
        let managed: Vec<String> = {
            let projects = self.projects.lock().await;
            projects
                .iter()
                .filter(|p| p.manager_id.as_deref() == Some(manager_id))
                .map(|p| p.id.clone())
                .collect()
        };
        let rows = self.joined_rows_in_range(range).await;
        Ok(rows
            .into_iter()
            .filter(|r| managed.iter().any(|id| *id == r.project_id))
            .collect())
    }

    async fn projects_by_manager(&self, manager_id: &str) -> anyhow::Result<Vec<Project>> {
        Ok(self
            .projects
            .lock()
            .await
            .iter()
            .filter(|p| p.manager_id.as_deref() == Some(manager_id))
            .cloned()
            .collect())
    }

    async fn approved_project_rows(
        &self,
        project_id: &str,
        range: DateRange,
    ) -> anyhow::Result<Vec<ProjectEntryRow>> {
        let entries: Vec<TimeEntry> = {
            let guard = self.entries.lock().await;
            guard
                .iter()
                .filter(|e| {
                    e.project_id == project_id
                        && e.status == EntryStatus::Aprobado
                        && range.contains(e.date)
                })
                .cloned()
                .collect()
        };
        let profiles = self.profiles.lock().await;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let consultant_name = profiles
                    .iter()
                    .find(|u| u.id == entry.user_id)
                    .map(|u| u.display_name());
                ProjectEntryRow {
                    entry_id: entry.id,
                    user_id: entry.user_id,
                    consultant_name,
                    date: entry.date,
                    duration_minutes: entry.duration_minutes,
                    description: entry.description,
                }
            })
            .collect())
    }

    async fn user_rows(&self, user_id: &str, range: DateRange) -> anyhow::Result<Vec<ReportRow>> {
        let rows = self.joined_rows_in_range(range).await;
        Ok(rows.into_iter().filter(|r| r.user_id == user_id).collect())
    }

    async fn rows_in_range(&self, range: DateRange) -> anyhow::Result<Vec<ReportRow>> {
        Ok(self.joined_rows_in_range(range).await)
    }

    async fn active_consultant_count(&self) -> anyhow::Result<u64> {
        Ok(self
            .profiles
            .lock()
            .await
            .iter()
            .filter(|u| u.role == Role::Consultor)
            .count() as u64)
    }
}
