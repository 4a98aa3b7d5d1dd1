//! Table of logged records with a delete control per row.
//!
//! DESIGN
//! ======
//! Rows are keyed by their view-local `row_id`, so appending a submission
//! renders one new `<tr>` and deleting drops only the affected rows.

use leptos::prelude::*;
use records::VolunteerRecord;

use crate::controller::AppController;
use crate::state::log_view::{LogRow, format_number};

#[cfg(test)]
#[path = "hours_table_test.rs"]
mod hours_table_test;

#[component]
pub fn HoursTable() -> impl IntoView {
    let controller = expect_context::<RwSignal<AppController>>();

    view! {
        <table id="hoursTable" class="hours-table">
            <thead>
                <tr>
                    <th>"Charity"</th>
                    <th>"Hours"</th>
                    <th>"Date"</th>
                    <th>"Rating"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || controller.with(|c| c.view().rows.clone())
                    key=|row| row.row_id
                    children=move |row: LogRow| view! { <HoursRow record=row.record/> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn HoursRow(record: VolunteerRecord) -> impl IntoView {
    let controller = expect_context::<RwSignal<AppController>>();
    let [name, hours, date, rating] = row_cells(&record);
    let on_delete = move |_| controller.update(|c| c.on_delete(&record));

    view! {
        <tr>
            <td>{name}</td>
            <td>{hours}</td>
            <td>{date}</td>
            <td>{rating}</td>
            <td>
                <button class="btn deleteButton" type="button" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Cell text for a record, in column order.
pub(crate) fn row_cells(record: &VolunteerRecord) -> [String; 4] {
    [
        record.charity_name.clone(),
        format_number(record.hours_volunteered),
        record.volunteer_date.clone(),
        format_number(record.experience_rating),
    ]
}
