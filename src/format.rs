//! Display Formatting
//!
//! Turns appointment records into display rows with placeholder fallbacks.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::models::{AppointmentDate, AppointmentRecord};

pub const PLACEHOLDER: &str = "-";
pub const UNKNOWN_PATIENT: &str = "Unknown";
pub const INVALID_DATE: &str = "Invalid Date";

/// Pattern used for `DateStyle::Locale` when no browser is available
#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_PATTERN: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// How appointment dates are rendered
#[derive(Debug, Clone, PartialEq)]
pub enum DateStyle {
    /// Browser locale and timezone (`Date.prototype.toLocaleString`)
    Locale,
    /// strftime pattern rendered at a fixed offset
    Pattern { pattern: String, offset: FixedOffset },
}

impl DateStyle {
    /// Pattern style in the viewer's current UTC offset
    pub fn local_pattern(pattern: impl Into<String>) -> Self {
        DateStyle::Pattern {
            pattern: pattern.into(),
            offset: local_offset(),
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub patient: String,
    pub email: String,
    pub contact: String,
    pub appointment_type: String,
    pub service: String,
    pub date: String,
    pub status: String,
    pub checked_in: &'static str,
}

impl RowView {
    pub fn from_record(record: &AppointmentRecord, style: &DateStyle) -> Self {
        Self {
            id: record.id.clone(),
            patient: non_empty(record.patient_full_name.as_deref())
                .unwrap_or(UNKNOWN_PATIENT)
                .to_string(),
            email: or_placeholder(record.email_address.as_deref()),
            contact: or_placeholder(record.contact_number.as_deref()),
            appointment_type: or_placeholder(record.appointment_type.as_deref()),
            service: or_placeholder(record.service_ref.as_deref()),
            date: format_date(record.appointment_date.as_ref(), style),
            status: or_placeholder(record.status.as_deref()),
            checked_in: checked_in_label(record.is_checked_in()),
        }
    }
}

pub fn checked_in_label(checked_in: bool) -> &'static str {
    if checked_in { "Yes" } else { "No" }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(PLACEHOLDER).to_string()
}

/// Render an optional stored date; absent or blank dates render the placeholder
pub fn format_date(date: Option<&AppointmentDate>, style: &DateStyle) -> String {
    let Some(date) = date else {
        return PLACEHOLDER.to_string();
    };
    if matches!(date, AppointmentDate::Text(text) if text.trim().is_empty()) {
        return PLACEHOLDER.to_string();
    }
    let local = match style {
        DateStyle::Locale => local_offset(),
        DateStyle::Pattern { offset, .. } => *offset,
    };
    let Some(instant) = date.to_utc(&local) else {
        return INVALID_DATE.to_string();
    };

    match style {
        DateStyle::Locale => locale_string(instant),
        DateStyle::Pattern { pattern, offset } => {
            render_pattern(instant.with_timezone(offset), pattern)
        }
    }
}

// chrono reports bad specifiers as a fmt error rather than at parse time.
fn render_pattern<Tz: chrono::TimeZone>(instant: DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    match write!(out, "{}", instant.format(pattern)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_string(instant: DateTime<Utc>) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_f64(instant.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_string(instant: DateTime<Utc>) -> String {
    render_pattern(instant, FALLBACK_PATTERN)
}

/// The viewer's current offset from UTC
#[cfg(target_arch = "wasm32")]
pub fn local_offset() -> FixedOffset {
    // getTimezoneOffset is minutes *behind* UTC
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset() -> FixedOffset {
    Utc.fix()
}

/// Escape text for HTML element content or a quoted attribute value
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_pattern(pattern: &str) -> DateStyle {
        DateStyle::Pattern {
            pattern: pattern.to_string(),
            offset: Utc.fix(),
        }
    }

    #[test]
    fn test_bare_record_row() {
        let row = RowView::from_record(&AppointmentRecord::new("a1"), &DateStyle::Locale);
        assert_eq!(row.id, "a1");
        assert_eq!(row.patient, "Unknown");
        for field in [&row.email, &row.contact, &row.appointment_type, &row.service, &row.date, &row.status] {
            assert_eq!(field, "-");
        }
        assert_eq!(row.checked_in, "No");
    }

    #[test]
    fn test_full_record_row() {
        let record = AppointmentRecord {
            patient_full_name: Some("Jane Doe".into()),
            email_address: Some("jane@example.com".into()),
            status: Some("confirmed".into()),
            checked_in: Some(true),
            appointment_date: Some(AppointmentDate::Text("2025-08-27T10:00:00Z".into())),
            ..AppointmentRecord::new("a1")
        };
        let row = RowView::from_record(&record, &utc_pattern("%Y-%m-%d %H:%M"));
        assert_eq!(row.patient, "Jane Doe");
        assert_eq!(row.email, "jane@example.com");
        assert_eq!(row.contact, "-");
        assert_eq!(row.date, "2025-08-27 10:00");
        assert_eq!(row.checked_in, "Yes");
    }

    #[test]
    fn test_empty_strings_use_fallbacks() {
        let record = AppointmentRecord {
            patient_full_name: Some(String::new()),
            status: Some(String::new()),
            ..AppointmentRecord::new("a1")
        };
        let row = RowView::from_record(&record, &DateStyle::Locale);
        assert_eq!(row.patient, "Unknown");
        assert_eq!(row.status, "-");
    }

    #[test]
    fn test_date_rendering() {
        let date = AppointmentDate::Text("2025-08-27T10:00:00Z".into());

        let manila = DateStyle::Pattern {
            pattern: "%b %-d, %Y %-I:%M %p".into(),
            offset: FixedOffset::east_opt(8 * 3600).unwrap(),
        };
        assert_eq!(format_date(Some(&date), &manila), "Aug 27, 2025 6:00 PM");

        // native fallback for the browser locale style
        assert_eq!(format_date(Some(&date), &DateStyle::Locale), "8/27/2025, 10:00:00 AM");

        assert_eq!(format_date(None, &DateStyle::Locale), "-");
        assert_eq!(format_date(Some(&AppointmentDate::Text("  ".into())), &DateStyle::Locale), "-");
        assert_eq!(
            format_date(Some(&AppointmentDate::Text("soon".into())), &DateStyle::Locale),
            "Invalid Date"
        );
    }

    #[test]
    fn test_offsetless_time_keeps_wall_clock() {
        let manila = DateStyle::Pattern {
            pattern: "%H:%M".into(),
            offset: FixedOffset::east_opt(8 * 3600).unwrap(),
        };
        assert_eq!(format_date(Some(&AppointmentDate::Text("2025-08-27T10:00".into())), &manila), "10:00");
        assert_eq!(format_date(Some(&AppointmentDate::Text("2025-08-27T10:00:00".into())), &manila), "10:00");
        assert_eq!(format_date(Some(&AppointmentDate::Text("2025-08-27T10:00:00Z".into())), &manila), "18:00");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_checked_in_label() {
        assert_eq!(checked_in_label(true), "Yes");
        assert_eq!(checked_in_label(false), "No");
    }
}
