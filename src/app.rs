//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use records::RecordStore;

use crate::config::AppConfig;
use crate::controller::AppController;
use crate::pages::volunteer_log::VolunteerLogPage;
use crate::util::local_storage::BrowserStorage;

/// Root application component.
///
/// Builds the browser-backed controller once and provides it to every child.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let store = RecordStore::new(BrowserStorage, config.store_config());
    let controller = RwSignal::new(AppController::new(store));
    provide_context(controller);

    view! {
        <Title text="Volunteer Hours Tracker"/>
        <VolunteerLogPage/>
    }
}
