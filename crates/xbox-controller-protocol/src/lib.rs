//! Input model for Xbox-style controllers
//!
//! This crate names the analog axes and digital buttons of an Xbox-style
//! gamepad and decodes wired Xbox 360 USB input reports into a fixed-size
//! [`XboxControllerState`] indexed by those names.
//!
//! ## Layout
//! - 5 axes: left stick X/Y, combined triggers, right stick Y/X
//! - 19 button slots; the first 14 carry named buttons, D-pad directions
//!   answer to both a compass name and a cardinal alias
//!
//! ## Example
//! ```
//! use xbox_controller_protocol::{DecoderConfig, Xbox360InputReport, XboxAxis, XboxButton};
//!
//! let mut report = Xbox360InputReport::default();
//! report.set_raw_button(xbox_controller_protocol::Xbox360Button::A, true);
//! report.left_x = i16::MAX;
//!
//! let state = report.to_state(&DecoderConfig::default());
//! assert!(state[XboxButton::A]);
//! assert!((state[XboxAxis::LeftAnalogX] - 1.0).abs() < f32::EPSILON);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod ids;
pub mod input;
pub mod state;
pub mod types;

pub use config::*;
pub use ids::*;
pub use input::*;
pub use state::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XboxError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Unknown message type: {0:#04x}")]
    UnknownMessageType(u8),

    #[error("Unknown axis name: {0}")]
    UnknownAxisName(String),

    #[error("Unknown button name: {0}")]
    UnknownButtonName(String),

    #[error("Invalid decoder config: {0}")]
    InvalidConfig(String),
}

pub type XboxResult<T> = Result<T, XboxError>;

/// Number of analog axis slots in [`XboxControllerState`].
pub const NUM_XBOX_AXES: usize = 5;

/// Number of button slots in [`XboxControllerState`].
pub const NUM_XBOX_BUTTONS: usize = 19;
