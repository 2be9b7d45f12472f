use crate::modules::reporting::export::csv::{CsvDocument, report_filename};
use crate::modules::reporting::use_cases::executive_report::builder::ExecutiveReport;
use crate::shared::core::rounding::format_hours_csv;

pub fn export_executive_report(report: &ExecutiveReport) -> CsvDocument {
    let mut rows = Vec::new();
    for client in &report.clients {
        for system in &client.systems {
            for project in &system.projects {
                for item in &project.items {
                    rows.push(vec![
                        client.client_name.clone(),
                        system.system_name.clone(),
                        project.project_name.clone(),
                        project.manager_name.clone(),
                        item.status.label().to_string(),
                        format_hours_csv(item.total_hours),
                        item.unique_consultants.to_string(),
                    ]);
                }
            }
        }
    }

    CsvDocument {
        metadata: vec![
            vec!["Reporte Ejecutivo".to_string()],
            vec![
                "Periodo".to_string(),
                format!("{} a {}", report.range.start, report.range.end),
            ],
        ],
        header: [
            "Cliente",
            "Sistema",
            "Proyecto",
            "Gerente",
            "Estado",
            "Horas",
            "Consultores",
        ]
        .map(String::from)
        .to_vec(),
        rows,
        totals: vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_hours_csv(report.grand_total_hours),
            String::new(),
        ],
    }
}

pub fn executive_report_filename(report: &ExecutiveReport) -> String {
    report_filename("ejecutivo", "general", &report.range.period_slug())
}

#[cfg(test)]
mod executive_report_export_tests {
    use super::*;
    use crate::modules::reporting::use_cases::executive_report::builder::build_executive_report;
    use crate::tests::fixtures::rows::{ReportRowBuilder, january};
    use rstest::rstest;

    #[rstest]
    fn it_should_render_one_data_row_per_project_status_leaf() {
        let rows = vec![
            ReportRowBuilder::new().entry_id("te-1").minutes(120).build(),
            ReportRowBuilder::new()
                .entry_id("te-2")
                .minutes(60)
                .status(crate::modules::tracking::core::entry::EntryStatus::Aprobado)
                .build(),
        ];
        let report = build_executive_report(rows, january());
        let document = export_executive_report(&report);
        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.rows[0][4], "pendiente");
        assert_eq!(document.rows[0][5], "2,00");
        assert_eq!(document.totals[5], "3,00");
    }

    #[rstest]
    fn it_should_name_the_download_after_scope_and_period() {
        let report = build_executive_report(Vec::new(), january());
        assert_eq!(
            executive_report_filename(&report),
            "reporte-ejecutivo-general-2026-01-01_2026-01-31.csv"
        );
    }
}
