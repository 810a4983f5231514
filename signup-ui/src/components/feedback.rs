//! Signup feedback message

use activity_signup::FeedbackKind;
use leptos::*;

use crate::state::AppContext;

/// Success/error line under the signup form; hidden when empty
#[component]
pub fn FeedbackMessage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let feedback = ctx.feedback;

    let class = move || {
        feedback.with(|slot| {
            slot.current()
                .map(|fb| fb.kind.css_class())
                .unwrap_or("hidden")
        })
    };

    view! {
        <div id="message" role="status" class=class>
            {move || {
                feedback.with(|slot| {
                    slot.current().map(|fb| {
                        let icon = match fb.kind {
                            FeedbackKind::Success => "✓",
                            FeedbackKind::Error => "✕",
                        };
                        view! {
                            <span class="feedback-icon">{icon}</span>
                            <span class="feedback-text">{fb.message.clone()}</span>
                        }
                    })
                })
            }}
        </div>
    }
}
