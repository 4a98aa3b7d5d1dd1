//! Running total of logged hours.

use leptos::prelude::*;

use crate::controller::AppController;

#[component]
pub fn TotalHours() -> impl IntoView {
    let controller = expect_context::<RwSignal<AppController>>();

    view! {
        <p class="total-hours">
            "Total hours volunteered: "
            <span id="totalHours">{move || controller.with(|c| c.view().total_text())}</span>
        </p>
    }
}
