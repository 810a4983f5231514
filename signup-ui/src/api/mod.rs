//! API Client
//!
//! HTTP calls to the signup service.

pub mod client;

pub use client::{fetch_activities, submit_signup};
