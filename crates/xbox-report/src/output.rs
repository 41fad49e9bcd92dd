//! Output formatting for xbox-report

use anyhow::Error;
use colored::Colorize;
use serde::Serialize;
use serde_json::{Value, json};
use xbox_controller_protocol::{
    NUM_XBOX_BUTTONS, XboxAxis, XboxButton, XboxControllerState, XboxInputEvent,
};

use crate::error::ToolError;

/// One change event with the capture timestamp it was observed at.
#[derive(Debug, Clone, Serialize)]
pub struct TimedEvent {
    pub timestamp_us: u64,
    #[serde(flatten)]
    pub event: XboxInputEvent,
}

/// Totals for a replayed capture.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaySummary {
    pub reports: usize,
    pub decoded: usize,
    pub skipped: usize,
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

pub fn print_error_json(error: &Error) {
    let kind = error
        .downcast_ref::<ToolError>()
        .map_or("error", ToolError::kind);
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": kind,
        }
    }));
}

pub fn print_error_human(error: &Error) {
    eprintln!("{} {error}", "Error:".red().bold());
    for cause in error.chain().skip(1) {
        eprintln!("  {} {cause}", "Caused by:".yellow());
    }
}

pub fn layout_json() -> Value {
    let axes: Vec<Value> = XboxAxis::ALL
        .iter()
        .map(|axis| json!({ "index": axis.index(), "name": axis.name() }))
        .collect();
    let buttons: Vec<Value> = (0..NUM_XBOX_BUTTONS)
        .map(|index| match XboxButton::from_index(index) {
            Some(button) => json!({
                "index": index,
                "name": button.name(),
                "alias": button.alias_name(),
            }),
            None => json!({ "index": index, "name": null, "reserved": true }),
        })
        .collect();
    json!({ "success": true, "axes": axes, "buttons": buttons })
}

pub fn print_layout(json: bool) {
    if json {
        print_json(&layout_json());
        return;
    }

    println!("{}", "Axes:".bold());
    for axis in XboxAxis::ALL {
        println!("  [{:>2}] {}", axis.index(), axis.name());
    }
    println!("{}", "Buttons:".bold());
    for index in 0..NUM_XBOX_BUTTONS {
        match XboxButton::from_index(index) {
            Some(button) => match button.alias_name() {
                Some(alias) => println!("  [{index:>2}] {} (alias {alias})", button.name()),
                None => println!("  [{index:>2}] {}", button.name()),
            },
            None => println!("  [{index:>2}] {}", "(reserved)".dimmed()),
        }
    }
}

pub fn state_json(state: &XboxControllerState, guide: bool) -> Value {
    let axes: serde_json::Map<String, Value> = XboxAxis::ALL
        .iter()
        .map(|axis| (axis.name().to_string(), json!(state.axis(*axis))))
        .collect();
    let pressed: Vec<&str> = state.pressed_buttons().map(XboxButton::name).collect();
    json!({
        "success": true,
        "axes": axes,
        "pressed": pressed,
        "dpad": state.dpad_direction(),
        "guide": guide,
        "state": state,
    })
}

pub fn print_state(state: &XboxControllerState, guide: bool, json: bool) {
    if json {
        print_json(&state_json(state, guide));
        return;
    }

    println!("{}", "Axes:".bold());
    for axis in XboxAxis::ALL {
        println!("  {:<26} {:+.4}", axis.name(), state.axis(axis));
    }

    let pressed: Vec<&str> = state.pressed_buttons().map(XboxButton::name).collect();
    if pressed.is_empty() {
        println!("{} {}", "Pressed:".bold(), "none".dimmed());
    } else {
        println!("{} {}", "Pressed:".bold(), pressed.join(", ").green());
    }
    println!("{} {:?}", "D-pad:".bold(), state.dpad_direction());
    if guide {
        println!("{} {}", "Guide:".bold(), "pressed".green());
    }
}

pub fn print_replay(
    header: &str,
    events: &[TimedEvent],
    summary: &ReplaySummary,
    json: bool,
) {
    if json {
        print_json(&json!({
            "success": true,
            "device": header,
            "summary": summary,
            "events": events,
        }));
        return;
    }

    println!("{}", header.bold());
    let start = events.first().map_or(0, |e| e.timestamp_us);
    for timed in events {
        let offset = timed.timestamp_us.saturating_sub(start);
        println!("[+{offset:>10}µs] {}", timed.event);
    }
    println!(
        "{} reports, {} decoded, {} skipped, {} events",
        summary.reports,
        summary.decoded,
        summary.skipped,
        events.len()
    );
}
