//! Read-only weather conditions and sustainability score shown in the summary cards.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current conditions at the farm. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_f: i32,
    pub condition: String,
    /// Relative humidity, 0-100.
    pub humidity_pct: u8,
    pub forecast: String,
}

impl WeatherSnapshot {
    /// Large card text, e.g. "72°F".
    pub fn headline(&self) -> String {
        format!("{}°F", self.temperature_f)
    }

    /// Secondary card text, e.g. "Sunny, 45% Humidity".
    pub fn detail(&self) -> String {
        format!("{}, {}% Humidity", self.condition, self.humidity_pct)
    }
}

/// Sustainability score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SustainabilityScore(u8);

impl SustainabilityScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> anyhow::Result<Self> {
        if value > Self::MAX {
            bail!("sustainability score {} is above {}", value, Self::MAX);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SustainabilityScore {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SustainabilityScore> for u8 {
    fn from(score: SustainabilityScore) -> Self {
        score.0
    }
}

/// Renders as "85/100".
impl fmt::Display for SustainabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Everything the summary cards show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub weather: WeatherSnapshot,
    pub sustainability_score: SustainabilityScore,
}

impl Snapshot {
    /// Parse and validate `snapshot.json`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(json).context("failed to parse weather/score snapshot")?;
        if snapshot.weather.humidity_pct > 100 {
            bail!(
                "humidity_pct must be within 0-100, got {}",
                snapshot.weather.humidity_pct
            );
        }
        Ok(snapshot)
    }
}
