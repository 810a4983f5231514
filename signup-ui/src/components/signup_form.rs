//! Signup Form Component
//!
//! Email and activity inputs, submission, and the feedback line.

use activity_signup::{ClientResult, Feedback, SignupRequest};
use leptos::*;

use super::FeedbackMessage;
use crate::api;
use crate::state::AppContext;

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let activities = ctx.activities;
    let submitting = ctx.submitting;

    let (email, set_email) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // One signup at a time
        if submitting.get_untracked() {
            return;
        }

        let request = SignupRequest::new(email.get_untracked(), activity.get_untracked());
        submitting.set(true);

        let ctx = ctx.clone();
        spawn_local(async move {
            let result = api::submit_signup(&ctx.config.api_base, &request).await;

            match &result {
                Ok(_) => tracing::info!(activity = %request.activity, "Signup accepted"),
                Err(e) => {
                    tracing::warn!(activity = %request.activity, error = %e, "Error signing up")
                }
            }

            if apply_signup_result(&ctx, &result, set_email, set_activity) {
                // Pick up the new participant
                ctx.load_activities();
            }
            submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    // Keyed so a refetch reuses the selected option instead of
                    // replacing it under the user
                    <For
                        each=move || activities.with(|state| state.names())
                        key=|name| name.clone()
                        children=move |name| view! {
                            <option value=name.clone()>{name}</option>
                        }
                    />
                </select>
            </div>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>

        <FeedbackMessage />
    }
}

/// Show the outcome of a signup and clear the form after a success.
///
/// Returns whether the signup was accepted.
pub fn apply_signup_result(
    ctx: &AppContext,
    result: &ClientResult<String>,
    set_email: WriteSignal<String>,
    set_activity: WriteSignal<String>,
) -> bool {
    let accepted = result.is_ok();
    if accepted {
        set_email.set(String::new());
        set_activity.set(String::new());
    }
    ctx.show_feedback(Feedback::from_signup(result));
    accepted
}
