//! Subcommand implementations

use std::path::Path;

use anyhow::{Context, Result};
use xbox_controller_protocol::{
    DecoderConfig, Xbox360InputReport, XboxControllerState, xbox_model_from_info,
};

use crate::capture::{CaptureFile, parse_hex_bytes};
use crate::config::load_config;
use crate::error::ToolError;
use crate::output::{self, ReplaySummary, TimedEvent};

fn decoder_config(path: Option<&Path>) -> Result<DecoderConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(DecoderConfig::default()),
    }
}

pub fn layout(json: bool) -> Result<()> {
    output::print_layout(json);
    Ok(())
}

pub fn decode(hex: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let config = decoder_config(config)?;
    let bytes = parse_hex_bytes(hex)?;
    tracing::debug!(len = bytes.len(), "decoding report");

    let report = Xbox360InputReport::parse(&bytes).map_err(ToolError::from)?;
    let state = report.to_state(&config);
    output::print_state(&state, report.guide_pressed(), json);
    Ok(())
}

pub fn replay(capture: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let config = decoder_config(config)?;
    let file = CaptureFile::load(capture)
        .with_context(|| format!("Failed to read capture {}", capture.display()))?;

    let header = match file.ids() {
        Some((vid, pid)) => {
            let model = xbox_model_from_info(vid, pid);
            if !model.uses_xbox360_report() {
                tracing::warn!(
                    vid,
                    pid,
                    model = model.display_name(),
                    "capture is not from a wired Xbox 360 controller; decoding anyway"
                );
            }
            format!("{} (VID=0x{vid:04X} PID=0x{pid:04X})", model.display_name())
        }
        None => format!("VID={} PID={}", file.vendor_id, file.product_id),
    };

    let (events, summary) = replay_events(&file, &config);
    output::print_replay(&header, &events, &summary, json);
    Ok(())
}

/// Decode every capture in order and collect the changes between
/// consecutive decoded states. Reports that fail to decode are skipped.
pub fn replay_events(
    file: &CaptureFile,
    config: &DecoderConfig,
) -> (Vec<TimedEvent>, ReplaySummary) {
    let mut previous = XboxControllerState::default();
    let mut events = Vec::new();
    let mut summary = ReplaySummary {
        reports: file.captures.len(),
        ..ReplaySummary::default()
    };

    for (index, capture) in file.captures.iter().enumerate() {
        let decoded = parse_hex_bytes(&capture.data).and_then(|bytes| {
            xbox_controller_protocol::decode(&bytes, config).map_err(Into::into)
        });
        let state = match decoded {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(index, timestamp_us = capture.timestamp_us, error = %e, "skipping report");
                summary.skipped += 1;
                continue;
            }
        };

        summary.decoded += 1;
        events.extend(
            state
                .changes_since(&previous)
                .into_iter()
                .map(|event| TimedEvent {
                    timestamp_us: capture.timestamp_us,
                    event,
                }),
        );
        previous = state;
    }

    (events, summary)
}
