//! Type definitions for the Xbox input model

use crate::{NAMED_XBOX_BUTTONS, NUM_XBOX_AXES, XboxAxis, XboxButton, XboxModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XboxCapabilities {
    pub axis_count: usize,
    pub button_count: usize,
    pub has_guide_button: bool,
    pub has_rumble: bool,
    pub has_paddles: bool,
}

impl Default for XboxCapabilities {
    fn default() -> Self {
        Self {
            axis_count: NUM_XBOX_AXES,
            button_count: NAMED_XBOX_BUTTONS,
            has_guide_button: true,
            has_rumble: true,
            has_paddles: false,
        }
    }
}

impl XboxCapabilities {
    pub fn for_model(model: XboxModel) -> Self {
        match model {
            XboxModel::Elite2 => Self {
                has_paddles: true,
                ..Self::default()
            },
            XboxModel::Unknown => Self {
                has_rumble: false,
                ..Self::default()
            },
            XboxModel::Xbox360
            | XboxModel::Xbox360Wireless
            | XboxModel::XboxOne
            | XboxModel::XboxOneS
            | XboxModel::Series => Self::default(),
        }
    }
}

/// Eight-way view of the D-pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DpadDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Neutral,
}

impl DpadDirection {
    /// Combine the four cardinal switches. Opposite directions cancel.
    pub fn from_cardinals(up: bool, right: bool, down: bool, left: bool) -> Self {
        let vertical = i8::from(up) - i8::from(down);
        let horizontal = i8::from(right) - i8::from(left);
        match (vertical, horizontal) {
            (1, 0) => Self::Up,
            (1, 1) => Self::UpRight,
            (0, 1) => Self::Right,
            (-1, 1) => Self::DownRight,
            (-1, 0) => Self::Down,
            (-1, -1) => Self::DownLeft,
            (0, -1) => Self::Left,
            (1, -1) => Self::UpLeft,
            _ => Self::Neutral,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }
}

/// A single change between two controller states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum XboxInputEvent {
    AxisMoved { axis: XboxAxis, value: f32 },
    ButtonPressed { button: XboxButton },
    ButtonReleased { button: XboxButton },
}

impl std::fmt::Display for XboxInputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AxisMoved { axis, value } => write!(f, "{axis} -> {value:+.4}"),
            Self::ButtonPressed { button } => write!(f, "{button} pressed"),
            Self::ButtonReleased { button } => write!(f, "{button} released"),
        }
    }
}
