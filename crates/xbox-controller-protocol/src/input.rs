//! Xbox 360 wired controller input report decoding (20-byte USB report).
//!
//! # Report layout
//! | Offset | Size | Field          | Encoding                     |
//! |--------|------|----------------|------------------------------|
//! | 0      | u8   | message type   | `0x00` = input               |
//! | 1      | u8   | message length | `0x14`                       |
//! | 2–3    | u16  | buttons        | LE bitmask, see [`Xbox360Button`] |
//! | 4      | u8   | left trigger   | 0–255                        |
//! | 5      | u8   | right trigger  | 0–255                        |
//! | 6–7    | i16  | left stick X   | LE, −32768…32767, right = +  |
//! | 8–9    | i16  | left stick Y   | LE, up = +                   |
//! | 10–11  | i16  | right stick X  | LE                           |
//! | 12–13  | i16  | right stick Y  | LE                           |
//! | 14–19  |      | reserved       |                              |

use crate::{
    DecoderConfig, NUM_XBOX_AXES, XboxAxis, XboxButton, XboxControllerState, XboxError,
    XboxResult,
};

/// Full report length in bytes.
pub const REPORT_SIZE_XBOX360: usize = 20;

/// Message type byte of an input report.
pub const MESSAGE_TYPE_INPUT: u8 = 0x00;

/// Bit positions in the 16-bit button field of the Xbox 360 report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Xbox360Button {
    DpadUp = 0,
    DpadDown = 1,
    DpadLeft = 2,
    DpadRight = 3,
    Start = 4,
    Back = 5,
    LeftThumb = 6,
    RightThumb = 7,
    LeftShoulder = 8,
    RightShoulder = 9,
    Guide = 10,
    A = 12,
    B = 13,
    X = 14,
    Y = 15,
}

impl Xbox360Button {
    pub const fn mask(self) -> u16 {
        1 << (self as u8)
    }

    /// Slot this bit lands in, or `None` for the guide button.
    pub const fn to_button(self) -> Option<XboxButton> {
        match self {
            Self::DpadUp => Some(XboxButton::DpadNorth),
            Self::DpadDown => Some(XboxButton::DpadSouth),
            Self::DpadLeft => Some(XboxButton::DpadWest),
            Self::DpadRight => Some(XboxButton::DpadEast),
            Self::Start => Some(XboxButton::Start),
            Self::Back => Some(XboxButton::Back),
            Self::LeftThumb => Some(XboxButton::LeftAnalogStick),
            Self::RightThumb => Some(XboxButton::RightAnalogStick),
            Self::LeftShoulder => Some(XboxButton::LeftBumper),
            Self::RightShoulder => Some(XboxButton::RightBumper),
            Self::Guide => None,
            Self::A => Some(XboxButton::A),
            Self::B => Some(XboxButton::B),
            Self::X => Some(XboxButton::X),
            Self::Y => Some(XboxButton::Y),
        }
    }

    pub const ALL: [Xbox360Button; 15] = [
        Self::DpadUp,
        Self::DpadDown,
        Self::DpadLeft,
        Self::DpadRight,
        Self::Start,
        Self::Back,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::Guide,
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
    ];
}

/// Raw fields of one Xbox 360 input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Xbox360InputReport {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
}

fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
    let lo = *data.get(offset)?;
    let hi = *data.get(offset.checked_add(1)?)?;
    Some(u16::from_le_bytes([lo, hi]))
}

fn read_i16_le(data: &[u8], offset: usize) -> Option<i16> {
    read_u16_le(data, offset).map(|raw| raw as i16)
}

fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

impl Xbox360InputReport {
    /// Parse a raw report. Bytes past [`REPORT_SIZE_XBOX360`] are ignored.
    pub fn parse(data: &[u8]) -> XboxResult<Self> {
        if data.len() < REPORT_SIZE_XBOX360 {
            tracing::debug!(len = data.len(), "rejecting short Xbox 360 report");
            return Err(XboxError::InvalidReportSize {
                expected: REPORT_SIZE_XBOX360,
                actual: data.len(),
            });
        }

        let short = || XboxError::InvalidReportSize {
            expected: REPORT_SIZE_XBOX360,
            actual: data.len(),
        };

        let message_type = read_u8(data, 0).ok_or_else(short)?;
        if message_type != MESSAGE_TYPE_INPUT {
            tracing::debug!(message_type, "skipping non-input Xbox 360 message");
            return Err(XboxError::UnknownMessageType(message_type));
        }

        let report = Self {
            buttons: read_u16_le(data, 2).ok_or_else(short)?,
            left_trigger: read_u8(data, 4).ok_or_else(short)?,
            right_trigger: read_u8(data, 5).ok_or_else(short)?,
            left_x: read_i16_le(data, 6).ok_or_else(short)?,
            left_y: read_i16_le(data, 8).ok_or_else(short)?,
            right_x: read_i16_le(data, 10).ok_or_else(short)?,
            right_y: read_i16_le(data, 12).ok_or_else(short)?,
        };
        tracing::trace!(?report, "parsed Xbox 360 report");
        Ok(report)
    }

    /// Encode back into the 20-byte wire layout.
    pub fn to_bytes(&self) -> [u8; REPORT_SIZE_XBOX360] {
        let mut out = [0u8; REPORT_SIZE_XBOX360];
        let fields: [(usize, [u8; 2]); 5] = [
            (2, self.buttons.to_le_bytes()),
            (6, self.left_x.to_le_bytes()),
            (8, self.left_y.to_le_bytes()),
            (10, self.right_x.to_le_bytes()),
            (12, self.right_y.to_le_bytes()),
        ];
        for (offset, bytes) in fields {
            if let Some(slot) = out.get_mut(offset..offset + 2) {
                slot.copy_from_slice(&bytes);
            }
        }
        if let Some(header) = out.get_mut(0..2) {
            header.copy_from_slice(&[MESSAGE_TYPE_INPUT, REPORT_SIZE_XBOX360 as u8]);
        }
        if let Some(triggers) = out.get_mut(4..6) {
            triggers.copy_from_slice(&[self.left_trigger, self.right_trigger]);
        }
        out
    }

    pub fn raw_button(&self, button: Xbox360Button) -> bool {
        self.buttons & button.mask() != 0
    }

    pub fn set_raw_button(&mut self, button: Xbox360Button, pressed: bool) {
        if pressed {
            self.buttons |= button.mask();
        } else {
            self.buttons &= !button.mask();
        }
    }

    pub fn guide_pressed(&self) -> bool {
        self.raw_button(Xbox360Button::Guide)
    }

    /// Map raw fields onto the named axis and button slots.
    pub fn to_state(&self, config: &DecoderConfig) -> XboxControllerState {
        let stick = |raw: i16, invert: bool| {
            let value = apply_deadzone(normalize_stick(raw), config.stick_deadzone);
            if invert { -value } else { value }
        };
        let trigger =
            |raw: u8| apply_deadzone(f32::from(raw) / f32::from(u8::MAX), config.trigger_threshold);

        let mut axes = [0.0f32; NUM_XBOX_AXES];
        for axis in XboxAxis::ALL {
            let value = match axis {
                XboxAxis::LeftAnalogX => stick(self.left_x, false),
                XboxAxis::LeftAnalogY => stick(self.left_y, config.invert_left_y),
                XboxAxis::Triggers => {
                    trigger(self.left_trigger) - trigger(self.right_trigger)
                }
                XboxAxis::RightAnalogY => stick(self.right_y, config.invert_right_y),
                XboxAxis::RightAnalogX => stick(self.right_x, false),
            };
            if let Some(slot) = axes.get_mut(axis.index()) {
                *slot = value;
            }
        }

        let mut state = XboxControllerState::from_axes(axes);
        for raw in Xbox360Button::ALL {
            if let Some(button) = raw.to_button() {
                state.set_button(button, self.raw_button(raw));
            }
        }
        state
    }
}

/// Parse a raw report and map it in one step.
pub fn decode(data: &[u8], config: &DecoderConfig) -> XboxResult<XboxControllerState> {
    Xbox360InputReport::parse(data).map(|report| report.to_state(config))
}

/// `i16::MIN` is clamped so both directions reach exactly ±1.0.
pub fn normalize_stick(raw: i16) -> f32 {
    (f32::from(raw) / f32::from(i16::MAX)).clamp(-1.0, 1.0)
}

/// Zero values inside `deadzone` and rescale the rest to keep the full range.
///
/// A NaN or non-positive `deadzone` leaves `value` unchanged.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if deadzone.is_nan() || deadzone <= 0.0 {
        return value;
    }
    let magnitude = value.abs();
    if magnitude <= deadzone {
        return 0.0;
    }
    let scaled = ((magnitude - deadzone) / (1.0 - deadzone)).min(1.0);
    scaled.copysign(value)
}
