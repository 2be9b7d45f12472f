use crate::modules::tracking::core::catalog::{Project, UserProfile};
use crate::modules::tracking::core::entry::TimeEntry;
use async_trait::async_trait;

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn insert(&self, entry: TimeEntry) -> anyhow::Result<()>;
    async fn find_by_id(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntry>>;
    async fn update(&self, entry: TimeEntry) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CatalogQueries: Send + Sync {
    async fn project_by_id(&self, project_id: &str) -> anyhow::Result<Option<Project>>;
    async fn profile_by_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;
    /// Profiles holding the `gerente` role, used by the manager selector.
    async fn managers(&self) -> anyhow::Result<Vec<UserProfile>>;
}
