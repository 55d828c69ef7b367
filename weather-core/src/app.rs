//! Wiring between the input surface, the provider and the output sink.

use std::io;

use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::WeatherQuery,
    provider::WeatherProvider,
    render::{render_error, render_reading},
    sink::OutputSink,
};

/// What a single activation ended up displaying.
#[derive(Debug)]
pub enum Outcome {
    /// A weather block was appended to the result region.
    Displayed,
    /// An error entry was appended to the error region.
    Failed(FetchError),
}

impl Outcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, Outcome::Displayed)
    }
}

#[derive(Debug)]
pub struct WeatherApp<P, S> {
    provider: P,
    sink: S,
}

impl<P: WeatherProvider, S: OutputSink> WeatherApp<P, S> {
    /// Bind the app to its provider and output sink.
    pub fn initialize(provider: P, sink: S) -> Self {
        Self { provider, sink }
    }

    /// Handle one trigger: look up `input` exactly as given and append either
    /// a weather block or an error entry. Fetch failures never escape; only a
    /// failing sink does.
    pub async fn activate(&mut self, input: &str) -> io::Result<Outcome> {
        let query = WeatherQuery::new(input);

        match self.provider.fetch_weather(&query).await {
            Ok(reading) => {
                debug!("Rendering reading for {:?}: {:?}", query.city, reading);
                render_reading(&reading, &mut self.sink)?;
                Ok(Outcome::Displayed)
            }
            Err(err) => {
                warn!("Lookup for {:?} failed: {err}", query.city);
                render_error(&err.to_string(), &mut self.sink)?;
                Ok(Outcome::Failed(err))
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Units, WeatherReading},
        sink::MemorySink,
    };
    use async_trait::async_trait;
    use std::{collections::VecDeque, sync::Mutex};

    /// Replays canned replies and records every city it was asked for.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        calls: Mutex<Vec<String>>,
        replies: Mutex<VecDeque<Result<WeatherReading, FetchError>>>,
    }

    impl ScriptedProvider {
        fn with(replies: Vec<Result<WeatherReading, FetchError>>) -> Self {
            Self {
                calls: Mutex::default(),
                replies: Mutex::new(replies.into()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError> {
            self.calls.lock().unwrap().push(query.city.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::NotFound))
        }
    }

    fn reading(description: &str, temperature: f64, humidity: u8) -> WeatherReading {
        WeatherReading {
            description: description.into(),
            temperature,
            humidity,
            units: Units::Imperial,
        }
    }

    #[tokio::test]
    async fn activation_passes_input_verbatim() {
        let provider = ScriptedProvider::with(vec![Ok(reading("snow", 20.0, 80))]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        app.activate("Denver").await.unwrap();

        assert_eq!(provider.calls(), vec!["Denver"]);
    }

    #[tokio::test]
    async fn empty_input_is_not_rejected_locally() {
        let provider = ScriptedProvider::with(vec![Err(FetchError::RequestFailed {
            status: reqwest::StatusCode::BAD_REQUEST,
            reason: "Nothing to geocode".into(),
        })]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        let outcome = app.activate("").await.unwrap();

        assert_eq!(provider.calls(), vec![""]);
        assert!(!outcome.is_displayed());
        assert_eq!(app.sink().errors, vec!["Request failed: Nothing to geocode"]);
    }

    #[tokio::test]
    async fn success_renders_one_block_with_all_fields() {
        let provider = ScriptedProvider::with(vec![Ok(reading("clear sky", 298.15, 50))]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        let outcome = app.activate("New York").await.unwrap();

        assert!(outcome.is_displayed());
        let sink = app.into_sink();
        assert_eq!(sink.readings.len(), 1);
        assert!(sink.errors.is_empty());

        let block = &sink.readings[0];
        assert_eq!(block.items.len(), 3);
        assert!(block.items[0].contains("clear sky"));
        assert!(block.items[1].contains("298.15"));
        assert!(block.items[2].contains("50"));
    }

    #[tokio::test]
    async fn not_found_renders_exactly_one_error_and_no_block() {
        let provider = ScriptedProvider::with(vec![Err(FetchError::NotFound)]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        let outcome = app.activate("InvalidCity").await.unwrap();

        assert!(matches!(outcome, Outcome::Failed(FetchError::NotFound)));
        assert_eq!(app.sink().errors, vec!["City not found"]);
        assert!(app.sink().readings.is_empty());
    }

    #[tokio::test]
    async fn network_failure_is_reported_distinctly() {
        let provider = ScriptedProvider::with(vec![Err(FetchError::Network(
            "connection refused".into(),
        ))]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        app.activate("New York").await.unwrap();

        let errors = &app.sink().errors;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Network error"));
        assert_ne!(errors[0], "City not found");
        assert!(app.sink().readings.is_empty());
    }

    #[tokio::test]
    async fn repeated_successes_accumulate() {
        let provider = ScriptedProvider::with(vec![
            Ok(reading("clear sky", 70.0, 40)),
            Ok(reading("light rain", 55.5, 90)),
        ]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        app.activate("Austin").await.unwrap();
        app.activate("Seattle").await.unwrap();

        let readings = &app.sink().readings;
        assert_eq!(readings.len(), 2);
        assert!(readings[0].contains("clear sky"));
        assert!(readings[1].contains("light rain"));
    }

    #[tokio::test]
    async fn retry_after_failure_succeeds() {
        let provider = ScriptedProvider::with(vec![
            Err(FetchError::Network("timed out".into())),
            Ok(reading("haze", 80.0, 30)),
        ]);
        let mut app = WeatherApp::initialize(&provider, MemorySink::default());

        app.activate("Cairo").await.unwrap();
        let outcome = app.activate("Cairo").await.unwrap();

        assert!(outcome.is_displayed());
        assert_eq!(app.sink().errors.len(), 1);
        assert_eq!(app.sink().readings.len(), 1);
    }
}
