//! Format-agnostic CSV rendering for the report exports. The serializer only
//! renders rows the builders already produced; numeric formatting (including
//! the decimal comma) happens in the exporters, not here.

/// Prefixed so spreadsheet applications recognize the encoding.
pub const UTF8_BOM: &str = "\u{feff}";

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Fixed document layout shared by all report exports:
/// metadata rows, blank row, header row, data rows, blank row, totals row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    pub metadata: Vec<Vec<String>>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<String>,
}

impl CsvDocument {
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.metadata.len() + self.rows.len() + 4);
        for row in &self.metadata {
            lines.push(render_row(row));
        }
        lines.push(String::new());
        lines.push(render_row(&self.header));
        for row in &self.rows {
            lines.push(render_row(row));
        }
        lines.push(String::new());
        lines.push(render_row(&self.totals));
        format!("{UTF8_BOM}{}\r\n", lines.join("\r\n"))
    }
}

fn render_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote-wraps and doubles internal quotes when the field contains a comma,
/// a quote or a line break. Applied uniformly regardless of locale.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `reporte-<scope>-<identifier>-<date-or-period>.csv`
pub fn report_filename(scope: &str, identifier: &str, period: &str) -> String {
    format!("reporte-{scope}-{identifier}-{period}.csv")
}
