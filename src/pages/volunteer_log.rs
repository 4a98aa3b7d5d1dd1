//! The volunteer hours page: form, table, and running total.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the load event. Once mounted it asks the controller to read
//! the stored log and render every row; later changes come from the form and
//! the per-row delete buttons.

use leptos::prelude::*;

use crate::components::hours_table::HoursTable;
use crate::components::total_hours::TotalHours;
use crate::components::volunteer_form::VolunteerForm;
use crate::controller::AppController;

#[component]
pub fn VolunteerLogPage() -> impl IntoView {
    let controller = expect_context::<RwSignal<AppController>>();

    // Reads no signals, so this runs exactly once after mount.
    Effect::new(move || controller.update(|c| c.on_load()));

    view! {
        <main class="volunteer-log-page">
            <h1>"Volunteer Hours Tracker"</h1>
            <VolunteerForm/>
            <HoursTable/>
            <TotalHours/>
        </main>
    }
}
