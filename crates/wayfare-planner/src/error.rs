use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The payload is not a JSON object, or a present field has a type no
    /// default can paper over (e.g. `itinerary` is a string).
    #[error("invalid trip response shape: {reason}")]
    InvalidResponseShape { reason: String },
}
