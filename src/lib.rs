//! # Activity Signup
//!
//! Core of a browser client for an activity signup service: the activity
//! catalogue, availability chart geometry, theme preference, signup request
//! building and response handling.
//!
//! Nothing in this crate touches the DOM or the network. The browser app in
//! `signup-ui/` supplies those through the traits defined here
//! ([`ChartSurface`], [`PreferenceBackend`], [`ThemeTarget`]).
//!
//! ## Modules
//!
//! - [`models`]: Activity snapshot as served by `GET /activities`
//! - [`chart`]: Donut chart of booked vs. available places
//! - [`theme`]: Persisted light/dark preference
//! - [`signup`]: Signup URLs and response interpretation
//! - [`feedback`]: Transient success/error messages
//! - [`config`]: Client configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_signup::{Activities, AvailabilityChart, Feedback, SignupRequest};
//! use activity_signup::signup::interpret_signup_response;
//!
//! let activities = Activities::from_json(r#"{
//!     "Chess Club": {
//!         "description": "Learn strategies",
//!         "schedule": "Fridays",
//!         "max_participants": 10,
//!         "participants": ["a@school.edu", "b@school.edu", "c@school.edu"]
//!     }
//! }"#).unwrap();
//!
//! let chess = activities.get("Chess Club").unwrap();
//! assert_eq!(chess.spots_left(), 7);
//! assert_eq!(chess.availability(), AvailabilityChart::new(3, 10));
//!
//! let request = SignupRequest::new("d@school.edu", "Chess Club");
//! assert_eq!(
//!     request.endpoint(""),
//!     "/activities/Chess%20Club/signup?email=d%40school.edu"
//! );
//!
//! let result = interpret_signup_response(200, r#"{"message": "Signed up"}"#);
//! assert!(Feedback::from_signup(&result).is_success());
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod signup;
pub mod theme;

pub use chart::{
    chart_dom_id, draw_availability_chart, AvailabilityChart, ChartPalette, ChartSurface, Sector,
    SectorKind,
};
pub use config::{generate_default_config, ClientConfig, ConfigError, API_BASE_STORAGE_KEY};
pub use error::{ClientError, ClientResult};
pub use feedback::{Feedback, FeedbackKind, FeedbackSlot, Generation};
pub use models::{Activities, Activity, ActivityEntry, DEFAULT_ICON};
pub use signup::{activities_endpoint, interpret_signup_response, SignupRequest};
pub use theme::{
    PreferenceBackend, PreferenceStore, Theme, ThemeTarget, UnknownTheme, THEME_STORAGE_KEY,
};
