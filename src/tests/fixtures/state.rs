use crate::modules::tracking::adapters::outbound::store_in_memory::InMemoryTimeStore;
use crate::modules::tracking::core::catalog::{ProjectStatus, Role, WorkFront};
use crate::modules::tracking::core::entry::EntryStatus;
use crate::modules::tracking::repository_port::EntryRepository;
use crate::shell::state::AppState;
use crate::tests::fixtures::catalog::{make_client, make_profile, make_system, project_for_manager};
use crate::tests::fixtures::rows::make_entry;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

/// One client/system/project with a gerente, a consultant and a director,
/// plus an approved 2h entry (`te-1`) and a pending 1h entry (`te-2`), both
/// in January 2026.
pub async fn seeded_state() -> (AppState, Arc<InMemoryTimeStore>) {
    let store = Arc::new(InMemoryTimeStore::new());
    store.seed_client(make_client("c-1", "Cliente Andino")).await;
    store.seed_system(make_system("s-1", "IBP")).await;
    store
        .seed_profile(make_profile("u-g1", "Gabriela", "Mora", Role::Gerente))
        .await;
    store
        .seed_profile(make_profile("u-ana", "Ana", "Pérez", Role::Consultor))
        .await;
    store
        .seed_profile(make_profile("u-dir", "Diego", "Salas", Role::Director))
        .await;

    let mut project = project_for_manager("p-1", "Maestros", "u-g1", ProjectStatus::Activo);
    project.client_id = "c-1".into();
    project.system_id = Some("s-1".into());
    project.work_front = Some(WorkFront::SapIbp);
    store.seed_project(project).await;

    let mut approved = make_entry("te-1", "u-ana", "p-1", 2026, 1, 5, 120);
    approved.status = EntryStatus::Aprobado;
    approved.processed_by = Some("u-g1".into());
    store.insert(approved).await.unwrap();
    store
        .insert(make_entry("te-2", "u-ana", "p-1", 2026, 1, 6, 60))
        .await
        .unwrap();

    (AppState::with_store(store.clone()), store)
}
