use crate::{
    Config, FetchError, WeatherQuery, WeatherReading, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Something that can turn a [`WeatherQuery`] into a [`WeatherReading`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError> {
        (**self).fetch_weather(query).await
    }
}

#[async_trait]
impl<'a, P: WeatherProvider + ?Sized> WeatherProvider for &'a P {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError> {
        (**self).fetch_weather(query).await
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::new(api_key.to_owned(), config.units)
        .with_base_url(config.base_url());

    Ok(Box::new(provider))
}
