use crate::domain::a001_organ_unit::ui::details::OrganUnitDetails;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single-view application: the organ unit form is the whole UI.
    view! {
        <OrganUnitDetails />
    }
}
