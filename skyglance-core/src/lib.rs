//! Core library for the `skyglance` city-weather widget.
//!
//! This crate defines:
//! - The snapshot model and the fixed icon mapping table
//! - The weather provider client and its error taxonomy
//! - The display-state slot with coordinate observers, the map view
//!   synchronizer, and pure rendering
//! - Configuration & credential handling
//!
//! It is used by `skyglance-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod map;
pub mod model;
pub mod provider;
pub mod render;
pub mod state;
pub mod widget;

pub use config::Config;
pub use error::FetchError;
pub use icon::WeatherIcon;
pub use map::{MapView, SNAPSHOT_ZOOM, sync_map};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, openweather::OpenWeather};
pub use render::render;
pub use state::{DisplayState, SubscriptionId};
pub use widget::{Notifier, WeatherWidget};
