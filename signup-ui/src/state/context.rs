//! Application Context
//!
//! Everything the components share, created once at startup and handed
//! down through Leptos context.

use std::rc::Rc;

use activity_signup::error::LOAD_FAILED_MESSAGE;
use activity_signup::{Activities, ClientConfig, Feedback, FeedbackSlot, Theme};
use leptos::*;

use super::preferences::{self, DocumentTheme, LocalStorageBackend, ThemePreferences};
use crate::api;

/// Bundled client configuration
const BUNDLED_CONFIG: &str = include_str!("../../signup.toml");

/// Where the activity list stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Activities),
    Failed(String),
}

impl LoadState {
    /// Activity names for the signup selector; empty unless loaded
    pub fn names(&self) -> Vec<String> {
        match self {
            LoadState::Loaded(activities) => activities.names().map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

/// Shared application state provided to all components
#[derive(Clone)]
pub struct AppContext {
    /// Client configuration
    pub config: Rc<ClientConfig>,
    /// Activity catalogue
    pub activities: RwSignal<LoadState>,
    /// Theme currently applied to the document
    pub theme: RwSignal<Theme>,
    /// Signup feedback message
    pub feedback: RwSignal<FeedbackSlot>,
    /// A signup request is in flight
    pub submitting: RwSignal<bool>,
    preferences: ThemePreferences,
}

/// Build the context, apply the stored theme and provide it to the tree
pub fn provide_app_context() -> AppContext {
    let config = ClientConfig::load_or_default(BUNDLED_CONFIG)
        .with_api_base_override(preferences::stored_api_base());

    let ctx = AppContext::new(config);
    ctx.preferences.initialize();

    provide_context(ctx.clone());
    ctx
}

impl AppContext {
    /// Create the signals for `config` without touching the document
    pub fn new(config: ClientConfig) -> Self {
        let theme = create_rw_signal(Theme::default());

        Self {
            config: Rc::new(config),
            activities: create_rw_signal(LoadState::Loading),
            theme,
            feedback: create_rw_signal(FeedbackSlot::new()),
            submitting: create_rw_signal(false),
            preferences: ThemePreferences::new(LocalStorageBackend, DocumentTheme::new(theme)),
        }
    }

    /// Flip between light and dark, persisting the choice
    pub fn toggle_theme(&self) -> Theme {
        self.preferences.toggle()
    }

    /// Fetch the activity catalogue and publish the result.
    ///
    /// The current list stays on screen until the new one arrives.
    pub fn load_activities(&self) {
        let activities = self.activities;
        let api_base = self.config.api_base.clone();

        spawn_local(async move {
            match api::fetch_activities(&api_base).await {
                Ok(list) => {
                    tracing::info!(count = list.len(), "Loaded activities");
                    activities.set(LoadState::Loaded(list));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching activities");
                    activities.set(LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
                }
            }
        });
    }

    /// Show `feedback` now and hide it after the configured timeout.
    ///
    /// A newer message resets the clock: the old timer still fires but
    /// finds a different generation and leaves the slot alone.
    pub fn show_feedback(&self, feedback: Feedback) {
        let mut generation = 0;
        self.feedback
            .update(|slot| generation = slot.show(feedback));

        let slot = self.feedback;
        gloo_timers::callback::Timeout::new(self.config.feedback_timeout_ms, move || {
            slot.update(|s| {
                s.expire(generation);
            });
        })
        .forget();
    }
}
