//! Activity Card Component
//!
//! Details, availability chart and roster for one activity. Server strings
//! are rendered as text nodes only.

use activity_signup::{chart_dom_id, ActivityEntry};
use leptos::*;

use super::AvailabilityCanvas;
use crate::state::AppContext;

#[component]
pub fn ActivityCard(entry: ActivityEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let ActivityEntry { name, activity } = entry;

    let icon = activity.icon_or(&ctx.config.default_icon).to_string();
    let spots = format!("{} spots left", activity.spots_left());
    let chart = activity.availability();
    let canvas_id = chart_dom_id(&name);

    view! {
        <div class="activity-card">
            <div class="activity-header">
                <div class="activity-info">
                    <h4>
                        <span class="activity-icon">{icon}</span>
                        {name}
                    </h4>
                    <p>{activity.description}</p>
                    <p><strong>"Schedule:"</strong>" "{activity.schedule}</p>
                    <p><strong>"Availability:"</strong>" "{spots}</p>
                </div>
                <AvailabilityCanvas id=canvas_id chart=chart size=ctx.config.chart_size />
            </div>

            <div class="participants-section">
                <p><strong>"Current Participants:"</strong></p>
                <ul class="participants-list">
                    {activity
                        .participants
                        .into_iter()
                        .map(|email| view! { <li>{email}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
