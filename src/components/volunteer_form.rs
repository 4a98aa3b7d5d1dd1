//! Entry form for a single volunteer record.

use leptos::prelude::*;

use crate::controller::{AppController, FormFields, SubmitOutcome};
use crate::util::alert;

/// Four labelled inputs and a submit button.
///
/// A rejected submission raises a blocking alert listing every violated rule
/// and leaves the typed values in place.
#[component]
pub fn VolunteerForm() -> impl IntoView {
    let controller = expect_context::<RwSignal<AppController>>();
    let fields = RwSignal::new(FormFields::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = fields.get_untracked();
        let Some(outcome) = controller.try_update(|c| c.on_submit(&mut current)) else {
            return;
        };
        match outcome {
            SubmitOutcome::Accepted => fields.set(current),
            SubmitOutcome::Rejected(message) => alert::show(&message),
        }
    };

    view! {
        <form id="volunteerForm" class="volunteer-form" on:submit=on_submit>
            <label class="volunteer-form__field">
                "Charity name"
                <input
                    id="charityName"
                    type="text"
                    prop:value=move || fields.with(|f| f.charity_name.clone())
                    on:input=move |ev| fields.update(|f| f.charity_name = event_target_value(&ev))
                />
            </label>
            <label class="volunteer-form__field">
                "Hours volunteered"
                <input
                    id="hoursVolunteered"
                    type="number"
                    step="any"
                    prop:value=move || fields.with(|f| f.hours_volunteered.clone())
                    on:input=move |ev| fields.update(|f| f.hours_volunteered = event_target_value(&ev))
                />
            </label>
            <label class="volunteer-form__field">
                "Date"
                <input
                    id="volunteerDate"
                    type="date"
                    prop:value=move || fields.with(|f| f.volunteer_date.clone())
                    on:input=move |ev| fields.update(|f| f.volunteer_date = event_target_value(&ev))
                />
            </label>
            <label class="volunteer-form__field">
                "Experience rating (1-5)"
                <input
                    id="experienceRating"
                    type="number"
                    prop:value=move || fields.with(|f| f.experience_rating.clone())
                    on:input=move |ev| fields.update(|f| f.experience_rating = event_target_value(&ev))
                />
            </label>
            <button class="btn volunteer-form__submit" type="submit">
                "Log Hours"
            </button>
        </form>
    }
}
