use crate::modules::notifications::adapters::in_memory::InMemoryNotifier;
use crate::modules::reporting::queries_port::{ExecutiveReportFilter, ReportQueries};
use crate::modules::reporting::use_cases::executive_report::builder::build_executive_report;
use crate::modules::reporting::use_cases::project_report::builder::build_project_report;
use crate::modules::reporting::use_cases::project_report::export::export_project_report;
use crate::modules::tracking::adapters::outbound::store_in_memory::InMemoryTimeStore;
use crate::modules::tracking::core::catalog::{ProjectStatus, Role};
use crate::modules::tracking::core::entry::EntryStatus;
use crate::modules::tracking::use_cases::process_entry::command::{ProcessAction, ProcessEntry};
use crate::modules::tracking::use_cases::process_entry::handler::ProcessEntryHandler;
use crate::modules::tracking::use_cases::register_entry::handler::RegisterEntryHandler;
use crate::shared::core::rounding::format_hours;
use crate::tests::fixtures::catalog::{make_client, make_profile, make_system, project_for_manager};
use crate::tests::fixtures::rows::{january, register_command};
use std::sync::Arc;

/// Register three entries, approve them, and read the hours back through
/// every report.
#[tokio::test]
async fn approved_entries_flow_into_the_reports() {
    let store = Arc::new(InMemoryTimeStore::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    store.seed_client(make_client("c-1", "Cliente Andino")).await;
    store.seed_system(make_system("s-1", "IBP")).await;
    store
        .seed_profile(make_profile("u-g1", "Gabriela", "Mora", Role::Gerente))
        .await;
    store
        .seed_profile(make_profile("u-fixed-0001", "Ana", "Pérez", Role::Consultor))
        .await;
    let mut project = project_for_manager("p-0001", "Maestros", "u-g1", ProjectStatus::Activo);
    project.client_id = "c-1".into();
    project.system_id = Some("s-1".into());
    store.seed_project(project).await;

    let register = RegisterEntryHandler::new(store.clone());
    let process = ProcessEntryHandler::new(store.clone(), notifier.clone());

    // 120, 90 and 30 minutes.
    let intervals = [("te-1", 9, 0, 11, 0), ("te-2", 11, 0, 12, 30), ("te-3", 14, 0, 14, 30)];
    for (id, sh, sm, eh, em) in intervals {
        let entry = register
            .handle(register_command(id, sh, sm, eh, em))
            .await
            .unwrap();
        assert_eq!(entry.status, EntryStatus::Pendiente);
        process
            .handle(ProcessEntry {
                entry_id: id.to_string(),
                processed_by: "u-g1".to_string(),
                action: ProcessAction::Aprobar,
                reason: None,
            })
            .await
            .unwrap();
    }
    assert_eq!(notifier.sent.lock().await.len(), 3);

    let project_rows = store
        .approved_project_rows("p-0001", january())
        .await
        .unwrap();
    let project_report = build_project_report("p-0001", project_rows, january());
    assert_eq!(format_hours(project_report.grand_total_hours), "4.00");
    assert_eq!(project_report.consultants.len(), 1);
    assert_eq!(project_report.consultants[0].subtotal_hours, 4.0);

    let executive_rows = store
        .executive_rows(&ExecutiveReportFilter {
            client_ids: None,
            system_ids: None,
            work_front: None,
            range: january(),
        })
        .await
        .unwrap();
    let executive = build_executive_report(executive_rows, january());
    assert_eq!(executive.grand_total_hours, 4.0);
    assert_eq!(executive.clients[0].client_name, "Cliente Andino");
    let leaf = &executive.clients[0].systems[0].projects[0];
    assert_eq!(leaf.items.len(), 1);
    assert_eq!(leaf.items[0].status, EntryStatus::Aprobado);

    let document = export_project_report(&project_report);
    let rendered = document.render();
    assert!(rendered.starts_with('\u{feff}'));
    assert!(rendered.contains("Ana Pérez"));
    assert!(rendered.contains("4,00"));
}
