//! Report Service
//!
//! Printable and PDF reports over the appointment rows currently on screen.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ReportError;
use crate::format::{escape_html, RowView};

pub const REPORT_TITLE: &str = "Appointments Report";
pub const REPORT_FILE_NAME: &str = "appointments-report.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Date,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportColumn {
    pub key: String,
    pub header: String,
    /// Relative width; columns share the page proportionally
    pub width: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColumnKind>,
}

impl ReportColumn {
    fn new(key: &str, header: &str, width: u32, kind: ColumnKind) -> Self {
        Self {
            key: key.to_string(),
            header: header.to_string(),
            width,
            kind: Some(kind),
        }
    }
}

/// Input contract shared by both report outputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpec {
    pub title: String,
    /// Rows in display order, keyed by column key
    pub data: Vec<BTreeMap<String, String>>,
    pub columns: Vec<ReportColumn>,
    /// Active filter label -> value
    pub filters: BTreeMap<String, String>,
    /// Statistic label -> value
    pub summary: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Produces a downloadable PDF or opens a print dialog
pub trait ReportService: Send + Sync {
    fn generate_pdf(&self, spec: &ReportSpec) -> Result<(), ReportError>;
    fn generate_print(&self, spec: &ReportSpec) -> Result<(), ReportError>;
}

pub type SharedReportService = Arc<dyn ReportService>;

/// Report over the filtered appointment rows
pub fn appointments_report(rows: &[RowView], query: &str) -> ReportSpec {
    let columns = vec![
        ReportColumn::new("patient", "Patient", 18, ColumnKind::Text),
        ReportColumn::new("email", "Email", 18, ColumnKind::Text),
        ReportColumn::new("contact", "Contact", 12, ColumnKind::Text),
        ReportColumn::new("type", "Type", 12, ColumnKind::Text),
        ReportColumn::new("service", "Service", 12, ColumnKind::Text),
        ReportColumn::new("date", "Date", 14, ColumnKind::Date),
        ReportColumn::new("status", "Status", 8, ColumnKind::Text),
        ReportColumn::new("checkedIn", "Checked In", 6, ColumnKind::Boolean),
    ];

    let data = rows
        .iter()
        .map(|row| {
            BTreeMap::from([
                ("patient".to_string(), row.patient.clone()),
                ("email".to_string(), row.email.clone()),
                ("contact".to_string(), row.contact.clone()),
                ("type".to_string(), row.appointment_type.clone()),
                ("service".to_string(), row.service.clone()),
                ("date".to_string(), row.date.clone()),
                ("status".to_string(), row.status.clone()),
                ("checkedIn".to_string(), row.checked_in.to_string()),
            ])
        })
        .collect();

    let mut filters = BTreeMap::new();
    if !query.is_empty() {
        filters.insert("Search".to_string(), query.to_string());
    }

    let checked_in = rows.iter().filter(|row| row.checked_in == "Yes").count();
    let summary = BTreeMap::from([
        ("Total".to_string(), rows.len().to_string()),
        ("Checked in".to_string(), checked_in.to_string()),
        ("Not checked in".to_string(), (rows.len() - checked_in).to_string()),
    ]);

    ReportSpec {
        title: REPORT_TITLE.to_string(),
        data,
        columns,
        filters,
        summary,
        file_name: Some(REPORT_FILE_NAME.to_string()),
    }
}

/// Inner markup (`<head>` and `<body>`) of a standalone print document
pub fn render_report_html(spec: &ReportSpec) -> String {
    let total_width: u32 = spec.columns.iter().map(|c| c.width).sum::<u32>().max(1);
    let title = escape_html(&spec.title);
    let mut html = String::new();

    let _ = write!(
        html,
        "<head><meta charset=\"utf-8\"><title>{title}</title><style>\
         body{{font-family:sans-serif;margin:24px}}\
         table{{width:100%;border-collapse:collapse;font-size:12px}}\
         th,td{{border:1px solid #ccc;padding:4px 6px;text-align:left}}\
         th{{background:#f3f4f6}}\
         </style></head><body><h1>{title}</h1>"
    );

    if !spec.filters.is_empty() {
        html.push_str("<p class=\"filters\">");
        for (label, value) in &spec.filters {
            let _ = write!(html, "<span>{}: {}</span> ", escape_html(label), escape_html(value));
        }
        html.push_str("</p>");
    }

    html.push_str("<table><colgroup>");
    for column in &spec.columns {
        let _ = write!(html, "<col style=\"width:{}%\">", column.width * 100 / total_width);
    }
    html.push_str("</colgroup><thead><tr>");
    for column in &spec.columns {
        let _ = write!(html, "<th>{}</th>", escape_html(&column.header));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &spec.data {
        html.push_str("<tr>");
        for column in &spec.columns {
            let cell = row.get(&column.key).map(String::as_str).unwrap_or("");
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    if !spec.summary.is_empty() {
        html.push_str("<dl class=\"summary\">");
        for (label, value) in &spec.summary {
            let _ = write!(html, "<dt>{}</dt><dd>{}</dd>", escape_html(label), escape_html(value));
        }
        html.push_str("</dl>");
    }

    html.push_str("</body>");
    html
}

// ========================
// Browser implementation
// ========================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "clinicReports"], js_name = generatePDF)]
    fn bridge_generate_pdf(spec: JsValue) -> Result<(), JsValue>;
}

/// Print via a popup window; PDF via `window.clinicReports.generatePDF(spec)`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserReports;

impl ReportService for BrowserReports {
    fn generate_pdf(&self, spec: &ReportSpec) -> Result<(), ReportError> {
        tracing::info!(rows = spec.data.len(), "generating PDF report");
        pdf_via_bridge(spec)
    }

    fn generate_print(&self, spec: &ReportSpec) -> Result<(), ReportError> {
        tracing::info!(rows = spec.data.len(), "opening print view");
        print_in_popup(&render_report_html(spec))
    }
}

#[cfg(target_arch = "wasm32")]
fn pdf_via_bridge(spec: &ReportSpec) -> Result<(), ReportError> {
    // Plain objects rather than JS Maps for the BTreeMap fields
    let js_spec = spec
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ReportError::Bridge(e.to_string()))?;
    bridge_generate_pdf(js_spec).map_err(|e| ReportError::Bridge(format!("{:?}", e)))
}

#[cfg(target_arch = "wasm32")]
fn print_in_popup(markup: &str) -> Result<(), ReportError> {
    let window = web_sys::window().ok_or_else(|| ReportError::Unavailable("no window".into()))?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| ReportError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| ReportError::Unavailable("popup blocked".into()))?;
    let root = popup
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| ReportError::Unavailable("popup has no document".into()))?;
    root.set_inner_html(markup);
    popup.print().map_err(|e| ReportError::Unavailable(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn pdf_via_bridge(_spec: &ReportSpec) -> Result<(), ReportError> {
    Err(ReportError::Unavailable("PDF export requires a browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
fn print_in_popup(_markup: &str) -> Result<(), ReportError> {
    Err(ReportError::Unavailable("printing requires a browser".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DateStyle;
    use crate::models::AppointmentRecord;

    fn rows() -> Vec<RowView> {
        let jane = AppointmentRecord {
            patient_full_name: Some("Jane Doe".into()),
            checked_in: Some(true),
            ..AppointmentRecord::new("1")
        };
        let bare = AppointmentRecord::new("2");
        [jane, bare]
            .iter()
            .map(|r| RowView::from_record(r, &DateStyle::Locale))
            .collect()
    }

    #[test]
    fn test_report_shape() {
        let spec = appointments_report(&rows(), "");

        assert_eq!(spec.title, "Appointments Report");
        assert_eq!(spec.columns.len(), 8);
        assert_eq!(spec.columns[0].header, "Patient");
        assert_eq!(spec.data.len(), 2);
        assert_eq!(spec.data[0]["patient"], "Jane Doe");
        assert_eq!(spec.data[1]["patient"], "Unknown");
        assert_eq!(spec.data[1]["checkedIn"], "No");
        assert!(spec.filters.is_empty());
        assert_eq!(spec.summary["Total"], "2");
        assert_eq!(spec.summary["Checked in"], "1");
        assert_eq!(spec.summary["Not checked in"], "1");
        assert_eq!(spec.file_name.as_deref(), Some("appointments-report.pdf"));
    }

    #[test]
    fn test_report_records_active_search() {
        let spec = appointments_report(&rows()[..1], "jane");
        assert_eq!(spec.filters["Search"], "jane");
        assert_eq!(spec.summary["Total"], "1");
    }

    #[test]
    fn test_spec_serializes_camel_case() {
        let value = serde_json::to_value(appointments_report(&[], "")).unwrap();
        assert_eq!(value["fileName"], "appointments-report.pdf");
        assert_eq!(value["columns"][5]["type"], "date");
        assert_eq!(value["columns"][7]["type"], "boolean");
        assert_eq!(value["data"], serde_json::json!([]));
    }

    #[test]
    fn test_html_escapes_cells_and_keeps_column_order() {
        let mut spec = appointments_report(&rows(), "<b>");
        spec.data[0].insert("patient".into(), "<script>alert(1)</script>".into());

        let html = render_report_html(&spec);

        assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
        assert!(html.contains("<span>Search: &lt;b&gt;</span>"));
        assert!(!html.contains("<script>"));
        let patient = html.find("<th>Patient</th>").unwrap();
        let checked = html.find("<th>Checked In</th>").unwrap();
        assert!(patient < checked);
        assert!(html.contains("<dt>Total</dt><dd>2</dd>"));
    }

    #[test]
    fn test_browser_reports_unavailable_natively() {
        let spec = appointments_report(&rows(), "");
        assert!(matches!(BrowserReports.generate_print(&spec), Err(ReportError::Unavailable(_))));
        assert!(matches!(BrowserReports.generate_pdf(&spec), Err(ReportError::Unavailable(_))));
    }
}
