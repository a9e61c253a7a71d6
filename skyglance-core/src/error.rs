use thiserror::Error;

/// Everything that can go wrong between "search clicked" and "snapshot shown".
///
/// The widget treats the variants asymmetrically: empty-input and
/// provider-reported errors are surfaced to the user, transport and parse
/// failures are only logged. [`FetchError::is_user_visible`] encodes that
/// split so front ends don't each reinvent it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query was empty or whitespace-only; no request was sent.
    #[error("Please enter a city name")]
    EmptyCity,

    /// The provider answered with an error payload (unknown city, bad key,
    /// quota exceeded). Carries the provider's own message.
    #[error("{message}")]
    Provider { message: String },

    /// The request never produced a usable response.
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered 2xx but the body didn't match the schema.
    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether this error is shown to the user (alert) or only logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, FetchError::EmptyCity | FetchError::Provider { .. })
    }
}
