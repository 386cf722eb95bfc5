//! Appointment Row Component

use leptos::prelude::*;

use crate::format::RowView;

/// Column headers, matching the cell order of `AppointmentRow`
pub const COLUMN_HEADERS: [&str; 8] = [
    "Patient",
    "Email",
    "Contact",
    "Type",
    "Service",
    "Date",
    "Status",
    "Checked In",
];

#[component]
pub fn AppointmentRow(row: RowView) -> impl IntoView {
    let checked_class = if row.checked_in == "Yes" { "checked-in yes" } else { "checked-in no" };

    view! {
        <tr class="appointment-row">
            <td class="patient">{row.patient}</td>
            <td>{row.email}</td>
            <td>{row.contact}</td>
            <td>{row.appointment_type}</td>
            <td class="service-ref">{row.service}</td>
            <td class="date">{row.date}</td>
            <td class="status">{row.status}</td>
            <td class=checked_class>{row.checked_in}</td>
        </tr>
    }
}
