//! State Management
//!
//! Application context and the browser-backed preference store.

pub mod context;
pub mod preferences;

pub use context::{provide_app_context, AppContext, LoadState};
