//! Client for the remote trip-planning service.
//!
//! Responses are run through [`wayfare_planner::normalize`] before they are
//! returned, so callers only ever see [`wayfare_core::TripRecord`]s.

pub mod client;
pub mod error;
pub(crate) mod retry;
pub mod types;

pub use client::PlannerClient;
pub use error::ApiError;
pub use types::{TripPreferences, TripRequest};
