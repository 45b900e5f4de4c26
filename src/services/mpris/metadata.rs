use std::{collections::HashMap, time::Duration};

use zbus::zvariant::{OwnedValue, Value};

/// The subset of MPRIS track metadata the bridge reports
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    /// Track title
    pub title: String,

    /// Track artist(s), joined with ", "
    pub artist: String,

    /// URL to album artwork image
    pub artwork_url: Option<String>,

    /// Track duration
    pub length: Option<Duration>,
}

impl Default for TrackMetadata {
    fn default() -> Self {
        Self {
            title: "Unknown".to_string(),
            artist: "Unknown".to_string(),
            artwork_url: None,
            length: None,
        }
    }
}

fn unwrap_variant<'v, 'a>(value: &'v Value<'a>) -> &'v Value<'a> {
    match value {
        Value::Value(inner) => unwrap_variant(inner),
        other => other,
    }
}

fn as_string(value: &Value<'_>) -> Option<String> {
    match unwrap_variant(value) {
        Value::Str(s) => Some(s.as_str().to_string()),
        Value::ObjectPath(path) => Some(path.as_str().to_string()),
        _ => None,
    }
}

fn as_string_list(value: &Value<'_>) -> Option<Vec<String>> {
    match unwrap_variant(value) {
        Value::Array(array) => Some(array.iter().filter_map(as_string).collect()),
        other => as_string(other).map(|s| vec![s]),
    }
}

fn as_micros(value: &Value<'_>) -> Option<u64> {
    match unwrap_variant(value) {
        Value::I64(v) => u64::try_from(*v).ok(),
        Value::U64(v) => Some(*v),
        Value::I32(v) => u64::try_from(*v).ok(),
        Value::U32(v) => Some(u64::from(*v)),
        Value::F64(v) if *v >= 0.0 => Some(*v as u64),
        _ => None,
    }
}

impl From<&HashMap<String, OwnedValue>> for TrackMetadata {
    fn from(metadata: &HashMap<String, OwnedValue>) -> Self {
        let mut track = Self::default();

        if let Some(title) = metadata.get("xesam:title").and_then(|v| as_string(v)) {
            if !title.is_empty() {
                track.title = title;
            }
        }

        if let Some(artists) = metadata.get("xesam:artist").and_then(|v| as_string_list(v)) {
            let artists: Vec<String> = artists.into_iter().filter(|a| !a.is_empty()).collect();
            if !artists.is_empty() {
                track.artist = artists.join(", ");
            }
        }

        track.artwork_url = metadata
            .get("mpris:artUrl")
            .and_then(|v| as_string(v))
            .filter(|url| !url.is_empty());

        track.length = metadata
            .get("mpris:length")
            .and_then(|v| as_micros(v))
            .filter(|micros| *micros > 0)
            .map(Duration::from_micros);

        track
    }
}
