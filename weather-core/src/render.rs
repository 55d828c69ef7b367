//! Turning lookup results into display blocks.

use std::io;

use crate::{model::WeatherReading, sink::OutputSink};

/// A list container: one rendered line per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub items: Vec<String>,
}

impl ListBlock {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Whether any line of the block contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.items.iter().any(|item| item.contains(needle))
    }
}

pub fn reading_block(reading: &WeatherReading) -> ListBlock {
    ListBlock::new(vec![
        format!("Forecast: {}", reading.description),
        format!(
            "Temperature: {}{}",
            reading.temperature,
            reading.units.temperature_suffix()
        ),
        format!("Humidity: {}%", reading.humidity),
    ])
}

/// Append the reading to the result region. Prior output is left in place.
pub fn render_reading<S: OutputSink + ?Sized>(
    reading: &WeatherReading,
    sink: &mut S,
) -> io::Result<()> {
    sink.append_reading(reading_block(reading))
}

/// Append a single error entry. Repeated messages are not collapsed.
pub fn render_error<S: OutputSink + ?Sized>(message: &str, sink: &mut S) -> io::Result<()> {
    sink.append_error(message)
}
