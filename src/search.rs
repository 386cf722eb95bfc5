//! Appointment Search
//!
//! Case-insensitive substring matching across the searchable record fields.

use crate::models::AppointmentRecord;

/// True if `folded_query` (already lower-cased) occurs in any searchable field
///
/// Absent fields never match but do not exclude the record.
pub fn record_matches(record: &AppointmentRecord, folded_query: &str) -> bool {
    record
        .searchable_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(folded_query))
}

/// Records matching `query`, in their original order
///
/// An empty query returns every record unchanged.
pub fn filter_records(records: &[AppointmentRecord], query: &str) -> Vec<AppointmentRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let folded = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &folded))
        .cloned()
        .collect()
}
