use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::{AudioDevice, AudioDeviceProvider, AudioError, helper};

/// Output devices backed by the PulseAudio/PipeWire `pactl` command.
///
/// Each call spawns the helper afresh; the bridge keeps no connection to
/// the sound server open.
#[derive(Debug, Clone)]
pub struct PactlProvider {
    program: String,
}

impl PactlProvider {
    /// Create a provider invoking `program` (usually `pactl`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl AudioDeviceProvider for PactlProvider {
    #[instrument(skip(self))]
    async fn output_devices(&self, timeout: Duration) -> Result<Vec<AudioDevice>, AudioError> {
        let deadline = Instant::now() + timeout;

        let info = helper::run(&self.program, &["info"], timeout).await?;
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(AudioError::Timeout(timeout));
        }
        let sinks = helper::run(&self.program, &["list", "sinks"], remaining)
            .await
            .map_err(|e| match e {
                AudioError::Timeout(_) => AudioError::Timeout(timeout),
                other => other,
            })?;

        let default_sink = parse_default_sink(&info);
        let devices = build_devices(parse_sinks(&sinks)?, default_sink.as_deref());
        debug!(count = devices.len(), ?default_sink, "enumerated output devices");

        Ok(devices)
    }

    #[instrument(skip(self))]
    async fn set_default_output(&self, index: u32, timeout: Duration) -> Result<(), AudioError> {
        let index = index.to_string();
        helper::run(&self.program, &["set-default-sink", &index], timeout).await?;
        Ok(())
    }
}

/// One `Sink #N` block of `pactl list sinks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SinkEntry {
    pub index: u32,
    pub name: String,
    pub description: Option<String>,
}

pub(crate) fn parse_default_sink(info: &str) -> Option<String> {
    info.lines()
        .find_map(|line| line.trim().strip_prefix("Default Sink:"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

pub(crate) fn parse_sinks(listing: &str) -> Result<Vec<SinkEntry>, AudioError> {
    let mut sinks: Vec<SinkEntry> = Vec::new();

    for line in listing.lines().map(str::trim) {
        if let Some(index) = line.strip_prefix("Sink #") {
            let index = index
                .trim()
                .parse()
                .map_err(|_| AudioError::Parse(format!("bad sink header '{line}'")))?;
            sinks.push(SinkEntry {
                index,
                name: String::new(),
                description: None,
            });
            continue;
        }

        let Some(current) = sinks.last_mut() else {
            continue;
        };

        if let Some(name) = line.strip_prefix("Name:") {
            if current.name.is_empty() {
                current.name = name.trim().to_string();
            }
        } else if let Some(description) = line.strip_prefix("Description:") {
            current.description.get_or_insert_with(|| description.trim().to_string());
        }
    }

    Ok(sinks)
}

/// Turns parsed sinks into client-facing devices with at most one default.
pub(crate) fn build_devices(sinks: Vec<SinkEntry>, default_sink: Option<&str>) -> Vec<AudioDevice> {
    let mut default_seen = false;

    sinks
        .into_iter()
        .map(|sink| {
            let is_default = !default_seen && default_sink == Some(sink.name.as_str());
            default_seen |= is_default;
            let label = sink.description.unwrap_or(sink.name);
            AudioDevice::new(sink.index, label, is_default)
        })
        .collect()
}
