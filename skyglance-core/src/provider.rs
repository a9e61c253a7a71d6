use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::FetchError, model::WeatherSnapshot};

pub mod openweather;

/// Seam between the widget and the weather provider.
///
/// One invocation performs exactly one outbound read: no retries, no
/// timeout, no cancellation of an earlier in-flight call.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city and build the snapshot atomically.
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}
