//! Trip-response normalization and the local itinerary generator.
//!
//! Every trip, whether synthesized locally or returned by the remote
//! planning service, passes through [`normalize`] before it reaches the
//! history store or the display layer.

pub mod error;
pub mod normalize;
pub mod synth;
pub mod types;

pub use error::NormalizeError;
pub use normalize::{normalize, normalize_at, PLACEHOLDER_WEATHER};
pub use synth::{estimate_cost, plan_locally, synthesize, MAX_SYNTH_DAYS};
pub use types::{RawDay, RawTrip};
