use crate::modules::reporting::export::csv::{CsvDocument, report_filename};
use crate::modules::reporting::use_cases::manager_report::builder::ManagerReport;
use crate::shared::core::rounding::format_hours_csv;

pub fn export_manager_report(report: &ManagerReport) -> CsvDocument {
    let rows = report
        .projects
        .iter()
        .map(|p| {
            vec![
                p.project_name.clone(),
                format_hours_csv(p.approved_hours),
                p.pending_count.to_string(),
                p.consultant_count.to_string(),
            ]
        })
        .collect();

    CsvDocument {
        metadata: vec![
            vec!["Reporte de Gerente".to_string()],
            vec!["Gerente".to_string(), report.manager_id.clone()],
            vec![
                "Periodo".to_string(),
                format!("{:02}/{}", report.month, report.year),
            ],
        ],
        header: ["Proyecto", "Horas Aprobadas", "Pendientes", "Consultores"]
            .map(String::from)
            .to_vec(),
        rows,
        // The grand total converts the raw minute sum once; it is never the
        // sum of the already-rounded project rows.
        totals: vec![
            "Total".to_string(),
            format_hours_csv(report.kpis.total_approved_hours),
            String::new(),
            String::new(),
        ],
    }
}

pub fn manager_report_filename(report: &ManagerReport) -> String {
    report_filename(
        "gerente",
        &report.manager_id,
        &format!("{}-{:02}", report.year, report.month),
    )
}
