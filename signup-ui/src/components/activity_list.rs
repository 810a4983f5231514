//! Activity List Component
//!
//! One card per activity, in the order the service lists them.

use leptos::*;

use super::ActivityCard;
use crate::state::{AppContext, LoadState};

#[component]
pub fn ActivityList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let activities = ctx.activities;

    view! {
        <div id="activities-list">
            {move || match activities.get() {
                LoadState::Loading => view! {
                    <p class="loading">"Loading activities..."</p>
                }.into_view(),
                LoadState::Failed(message) => view! {
                    <p class="load-error">{message}</p>
                }.into_view(),
                LoadState::Loaded(list) => list
                    .into_iter()
                    .map(|entry| view! { <ActivityCard entry=entry /> })
                    .collect_view(),
            }}
        </div>
    }
}
