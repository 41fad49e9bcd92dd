//! Decoder configuration

use crate::{XboxError, XboxResult};
use serde::{Deserialize, Serialize};

/// XInput recommended left stick dead zone, in raw stick units.
pub const XINPUT_LEFT_STICK_DEADZONE: i16 = 7849;
/// XInput recommended right stick dead zone, in raw stick units.
pub const XINPUT_RIGHT_STICK_DEADZONE: i16 = 8689;
/// XInput recommended trigger threshold, in raw trigger units.
pub const XINPUT_TRIGGER_THRESHOLD: u8 = 30;

/// Controls how raw report values become normalized axes.
///
/// The default passes values through untouched: no dead zone, no trigger
/// threshold, no inversion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderConfig {
    /// Per-axis dead zone for both sticks, as a fraction of full scale.
    #[serde(default)]
    pub stick_deadzone: f32,

    /// Trigger readings at or below this fraction of full scale read as zero;
    /// readings above it are rescaled to keep the full range.
    #[serde(default)]
    pub trigger_threshold: f32,

    #[serde(default)]
    pub invert_left_y: bool,

    #[serde(default)]
    pub invert_right_y: bool,
}

impl DecoderConfig {
    /// Dead zones recommended for XInput controllers.
    ///
    /// Both sticks share one dead zone here, so the larger right stick value
    /// is used.
    pub fn xinput_defaults() -> Self {
        let stick = XINPUT_LEFT_STICK_DEADZONE.max(XINPUT_RIGHT_STICK_DEADZONE);
        Self {
            stick_deadzone: f32::from(stick) / f32::from(i16::MAX),
            trigger_threshold: f32::from(XINPUT_TRIGGER_THRESHOLD) / f32::from(u8::MAX),
            invert_left_y: false,
            invert_right_y: false,
        }
    }

    /// # Errors
    ///
    /// Returns [`XboxError::InvalidConfig`] if a threshold is not finite or
    /// falls outside `[0, 1)`.
    pub fn validate(&self) -> XboxResult<()> {
        check_fraction("stick_deadzone", self.stick_deadzone)?;
        check_fraction("trigger_threshold", self.trigger_threshold)?;
        Ok(())
    }
}

fn check_fraction(field: &str, value: f32) -> XboxResult<()> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(XboxError::InvalidConfig(format!(
            "{field} must be in [0, 1), got {value}"
        )));
    }
    Ok(())
}
