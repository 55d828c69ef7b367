//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-weather lookup
//! - Rendering of readings and errors into an output sink
//! - The trigger wiring that ties a lookup to its display
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod sink;

pub use app::{Outcome, WeatherApp};
pub use config::Config;
pub use error::FetchError;
pub use model::{CurrentWeather, Units, WeatherQuery, WeatherReading};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use render::ListBlock;
pub use sink::{MemorySink, OutputSink, TerminalSink};
