//! Deterministic synthetic values for generated fixtures

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use shared::Properties;

/// 2024-01-01T00:00:00Z, the reference point for generated timestamps
pub const EPOCH_SECS: i64 = 1_704_067_200;

/// RFC 3339 timestamp `offset_minutes` after the epoch
pub fn timestamp(offset_minutes: i64) -> String {
    let base = DateTime::<Utc>::from_timestamp(EPOCH_SECS, 0).unwrap_or_default();
    (base + Duration::minutes(offset_minutes)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar date `offset_days` after the epoch
pub fn date(offset_days: i64) -> String {
    let base = DateTime::<Utc>::from_timestamp(EPOCH_SECS, 0).unwrap_or_default();
    (base + Duration::days(offset_days)).format("%Y-%m-%d").to_string()
}

/// A reading that oscillates around `base` by at most `spread`
pub fn reading(base: f64, spread: f64, index: usize) -> f64 {
    round2(base + spread * (index as f64 * 0.7).sin())
}

/// A value in `min..=max`, stepping through the range with `index`
pub fn stepped(min: f64, max: f64, index: usize, steps: usize) -> f64 {
    let steps = steps.max(1);
    round2(min + (max - min) * ((index % (steps + 1)) as f64 / steps as f64))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `{ "lat": .., "lon": .. }`
pub fn location(lat: f64, lon: f64) -> Properties {
    Properties::new().with("lat", round2(lat)).with("lon", round2(lon))
}

/// Lowercase, hyphen-separated form of a display name
pub fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
