use crate::modules::reporting::export::csv::{CsvDocument, report_filename};
use crate::modules::reporting::use_cases::project_report::builder::ProjectReport;
use crate::shared::core::rounding::format_hours_csv;

pub fn export_project_report(report: &ProjectReport) -> CsvDocument {
    let mut rows = Vec::new();
    for consultant in &report.consultants {
        for entry in &consultant.entries {
            rows.push(vec![
                consultant.consultant_name.clone(),
                entry.date.to_string(),
                format_hours_csv(entry.hours),
                entry.description.clone(),
            ]);
        }
    }

    CsvDocument {
        metadata: vec![
            vec!["Reporte de Proyecto".to_string()],
            vec!["Proyecto".to_string(), report.project_id.clone()],
            vec![
                "Periodo".to_string(),
                format!("{} a {}", report.range.start, report.range.end),
            ],
        ],
        header: ["Consultor", "Fecha", "Horas", "Descripción"]
            .map(String::from)
            .to_vec(),
        rows,
        totals: vec![
            "Total".to_string(),
            String::new(),
            format_hours_csv(report.grand_total_hours),
            String::new(),
        ],
    }
}

pub fn project_report_filename(report: &ProjectReport) -> String {
    report_filename("proyecto", &report.project_id, &report.range.period_slug())
}
