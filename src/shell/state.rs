use crate::modules::directory::adapters::in_memory::InMemoryProvisioner;
use crate::modules::directory::use_cases::create_user::handler::CreateUserHandler;
use crate::modules::notifications::adapters::in_memory::InMemoryNotifier;
use crate::modules::reporting::queries_port::ReportQueries;
use crate::modules::tracking::adapters::outbound::store_in_memory::InMemoryTimeStore;
use crate::modules::tracking::repository_port::CatalogQueries;
use crate::modules::tracking::use_cases::process_entry::handler::ProcessEntryHandler;
use crate::modules::tracking::use_cases::register_entry::handler::RegisterEntryHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<dyn ReportQueries>,
    pub catalog: Arc<dyn CatalogQueries>,
    pub register_handler: Arc<RegisterEntryHandler<InMemoryTimeStore>>,
    pub process_handler: Arc<ProcessEntryHandler<InMemoryTimeStore, InMemoryNotifier>>,
    pub create_user_handler:
        Arc<CreateUserHandler<InMemoryTimeStore, InMemoryProvisioner, InMemoryNotifier>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryTimeStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryTimeStore>) -> Self {
        let notifier = Arc::new(InMemoryNotifier::new());
        let provisioner = Arc::new(InMemoryProvisioner::new(store.clone()));
        Self {
            reports: store.clone(),
            catalog: store.clone(),
            register_handler: Arc::new(RegisterEntryHandler::new(store.clone())),
            process_handler: Arc::new(ProcessEntryHandler::new(store.clone(), notifier.clone())),
            create_user_handler: Arc::new(CreateUserHandler::new(store, provisioner, notifier)),
        }
    }
}
