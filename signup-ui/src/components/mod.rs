//! UI Components
//!
//! Leptos components for the activity list, signup form and theme toggle.

pub mod activity_card;
pub mod activity_list;
pub mod availability_chart;
pub mod feedback;
pub mod signup_form;
pub mod theme_toggle;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use availability_chart::AvailabilityCanvas;
pub use feedback::FeedbackMessage;
pub use signup_form::SignupForm;
pub use theme_toggle::ThemeToggle;
