//! Axis, button and device identifiers for Xbox-style controllers
//!
//! Axis and button identifiers are plain indices into the fixed-size
//! sequences held by [`XboxControllerState`](crate::XboxControllerState).
//! The integer constants (`XBOX_AXIS_*`, `XBOX_BUTTON_*`) are the flat symbol
//! table; [`XboxAxis`] and [`XboxButton`] are the typed equivalents.
//!
//! Each D-pad direction has a compass name and a cardinal alias
//! (`DPAD_NORTH` / `DPAD_UP`). Both names resolve to the same slot.
//!
//! Device IDs: Microsoft's USB VID `0x045E` covers every first-party pad.
//! Sources: Linux `xpad` driver device table, SDL `controller_type.c`.

use crate::{NUM_XBOX_AXES, NUM_XBOX_BUTTONS, XboxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const XBOX_AXIS_LEFT_ANALOG_X: usize = 0;
pub const XBOX_AXIS_LEFT_ANALOG_Y: usize = 1;
pub const XBOX_AXIS_TRIGGERS: usize = 2;
pub const XBOX_AXIS_RIGHT_ANALOG_Y: usize = 3;
pub const XBOX_AXIS_RIGHT_ANALOG_X: usize = 4;

pub const XBOX_BUTTON_A: usize = 0;
pub const XBOX_BUTTON_B: usize = 1;
pub const XBOX_BUTTON_X: usize = 2;
pub const XBOX_BUTTON_Y: usize = 3;
pub const XBOX_BUTTON_LEFT_BUMPER: usize = 4;
pub const XBOX_BUTTON_RIGHT_BUMPER: usize = 5;
pub const XBOX_BUTTON_BACK: usize = 6;
pub const XBOX_BUTTON_START: usize = 7;
pub const XBOX_BUTTON_LEFT_ANALOG_STICK: usize = 8;
pub const XBOX_BUTTON_RIGHT_ANALOG_STICK: usize = 9;
pub const XBOX_BUTTON_DPAD_NORTH: usize = 10;
pub const XBOX_BUTTON_DPAD_UP: usize = XBOX_BUTTON_DPAD_NORTH;
pub const XBOX_BUTTON_DPAD_EAST: usize = 11;
pub const XBOX_BUTTON_DPAD_RIGHT: usize = XBOX_BUTTON_DPAD_EAST;
pub const XBOX_BUTTON_DPAD_SOUTH: usize = 12;
pub const XBOX_BUTTON_DPAD_DOWN: usize = XBOX_BUTTON_DPAD_SOUTH;
pub const XBOX_BUTTON_DPAD_WEST: usize = 13;
pub const XBOX_BUTTON_DPAD_LEFT: usize = XBOX_BUTTON_DPAD_WEST;

/// Number of button slots that carry a named button.
///
/// Slots `NAMED_XBOX_BUTTONS..NUM_XBOX_BUTTONS` are reserved and stay
/// released in every decoded state.
pub const NAMED_XBOX_BUTTONS: usize = 14;

const _: () = assert!(NAMED_XBOX_BUTTONS <= NUM_XBOX_BUTTONS);

/// Analog axis of an Xbox-style controller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum XboxAxis {
    #[serde(rename = "XBOX_AXIS_LEFT_ANALOG_X")]
    LeftAnalogX = 0,
    #[serde(rename = "XBOX_AXIS_LEFT_ANALOG_Y")]
    LeftAnalogY = 1,
    /// Both triggers folded into one axis: left trigger positive, right negative.
    #[serde(rename = "XBOX_AXIS_TRIGGERS")]
    Triggers = 2,
    #[serde(rename = "XBOX_AXIS_RIGHT_ANALOG_Y")]
    RightAnalogY = 3,
    #[serde(rename = "XBOX_AXIS_RIGHT_ANALOG_X")]
    RightAnalogX = 4,
}

impl XboxAxis {
    /// Every axis in index order.
    pub const ALL: [XboxAxis; NUM_XBOX_AXES] = [
        XboxAxis::LeftAnalogX,
        XboxAxis::LeftAnalogY,
        XboxAxis::Triggers,
        XboxAxis::RightAnalogY,
        XboxAxis::RightAnalogX,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical symbol, e.g. `XBOX_AXIS_TRIGGERS`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftAnalogX => "XBOX_AXIS_LEFT_ANALOG_X",
            Self::LeftAnalogY => "XBOX_AXIS_LEFT_ANALOG_Y",
            Self::Triggers => "XBOX_AXIS_TRIGGERS",
            Self::RightAnalogY => "XBOX_AXIS_RIGHT_ANALOG_Y",
            Self::RightAnalogX => "XBOX_AXIS_RIGHT_ANALOG_X",
        }
    }

    fn short_name(self) -> &'static str {
        self.name().trim_start_matches("XBOX_AXIS_")
    }
}

impl fmt::Display for XboxAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for XboxAxis {
    type Err = XboxError;

    /// Accepts `XBOX_AXIS_TRIGGERS`, `TRIGGERS` or `triggers`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper.strip_prefix("XBOX_AXIS_").unwrap_or(&upper);
        Self::ALL
            .into_iter()
            .find(|axis| axis.short_name() == short)
            .ok_or_else(|| XboxError::UnknownAxisName(s.to_string()))
    }
}

/// Digital button of an Xbox-style controller.
///
/// D-pad variants use compass names; the cardinal aliases are associated
/// constants ([`XboxButton::DPAD_UP`] and friends) that resolve to the same
/// variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum XboxButton {
    #[serde(rename = "XBOX_BUTTON_A")]
    A = 0,
    #[serde(rename = "XBOX_BUTTON_B")]
    B = 1,
    #[serde(rename = "XBOX_BUTTON_X")]
    X = 2,
    #[serde(rename = "XBOX_BUTTON_Y")]
    Y = 3,
    #[serde(rename = "XBOX_BUTTON_LEFT_BUMPER")]
    LeftBumper = 4,
    #[serde(rename = "XBOX_BUTTON_RIGHT_BUMPER")]
    RightBumper = 5,
    #[serde(rename = "XBOX_BUTTON_BACK")]
    Back = 6,
    #[serde(rename = "XBOX_BUTTON_START")]
    Start = 7,
    #[serde(rename = "XBOX_BUTTON_LEFT_ANALOG_STICK")]
    LeftAnalogStick = 8,
    #[serde(rename = "XBOX_BUTTON_RIGHT_ANALOG_STICK")]
    RightAnalogStick = 9,
    #[serde(rename = "XBOX_BUTTON_DPAD_NORTH", alias = "XBOX_BUTTON_DPAD_UP")]
    DpadNorth = 10,
    #[serde(rename = "XBOX_BUTTON_DPAD_EAST", alias = "XBOX_BUTTON_DPAD_RIGHT")]
    DpadEast = 11,
    #[serde(rename = "XBOX_BUTTON_DPAD_SOUTH", alias = "XBOX_BUTTON_DPAD_DOWN")]
    DpadSouth = 12,
    #[serde(rename = "XBOX_BUTTON_DPAD_WEST", alias = "XBOX_BUTTON_DPAD_LEFT")]
    DpadWest = 13,
}

impl XboxButton {
    pub const DPAD_UP: XboxButton = XboxButton::DpadNorth;
    pub const DPAD_RIGHT: XboxButton = XboxButton::DpadEast;
    pub const DPAD_DOWN: XboxButton = XboxButton::DpadSouth;
    pub const DPAD_LEFT: XboxButton = XboxButton::DpadWest;

    /// Every named button in index order. Aliases are not repeated.
    pub const ALL: [XboxButton; NAMED_XBOX_BUTTONS] = [
        XboxButton::A,
        XboxButton::B,
        XboxButton::X,
        XboxButton::Y,
        XboxButton::LeftBumper,
        XboxButton::RightBumper,
        XboxButton::Back,
        XboxButton::Start,
        XboxButton::LeftAnalogStick,
        XboxButton::RightAnalogStick,
        XboxButton::DpadNorth,
        XboxButton::DpadEast,
        XboxButton::DpadSouth,
        XboxButton::DpadWest,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `None` for reserved slots and indices past [`NUM_XBOX_BUTTONS`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical symbol, e.g. `XBOX_BUTTON_DPAD_NORTH`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "XBOX_BUTTON_A",
            Self::B => "XBOX_BUTTON_B",
            Self::X => "XBOX_BUTTON_X",
            Self::Y => "XBOX_BUTTON_Y",
            Self::LeftBumper => "XBOX_BUTTON_LEFT_BUMPER",
            Self::RightBumper => "XBOX_BUTTON_RIGHT_BUMPER",
            Self::Back => "XBOX_BUTTON_BACK",
            Self::Start => "XBOX_BUTTON_START",
            Self::LeftAnalogStick => "XBOX_BUTTON_LEFT_ANALOG_STICK",
            Self::RightAnalogStick => "XBOX_BUTTON_RIGHT_ANALOG_STICK",
            Self::DpadNorth => "XBOX_BUTTON_DPAD_NORTH",
            Self::DpadEast => "XBOX_BUTTON_DPAD_EAST",
            Self::DpadSouth => "XBOX_BUTTON_DPAD_SOUTH",
            Self::DpadWest => "XBOX_BUTTON_DPAD_WEST",
        }
    }

    /// Cardinal alias symbol for D-pad buttons.
    pub const fn alias_name(self) -> Option<&'static str> {
        match self {
            Self::DpadNorth => Some("XBOX_BUTTON_DPAD_UP"),
            Self::DpadEast => Some("XBOX_BUTTON_DPAD_RIGHT"),
            Self::DpadSouth => Some("XBOX_BUTTON_DPAD_DOWN"),
            Self::DpadWest => Some("XBOX_BUTTON_DPAD_LEFT"),
            _ => None,
        }
    }

    pub const fn is_dpad(self) -> bool {
        self.alias_name().is_some()
    }
}

impl fmt::Display for XboxButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for XboxButton {
    type Err = XboxError;

    /// Accepts canonical names, D-pad aliases and the short forms of both
    /// (`DPAD_UP`, `dpad_north`, `a`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper.strip_prefix("XBOX_BUTTON_").unwrap_or(&upper);
        Self::ALL
            .into_iter()
            .find(|button| {
                button.name().trim_start_matches("XBOX_BUTTON_") == short
                    || button
                        .alias_name()
                        .is_some_and(|alias| alias.trim_start_matches("XBOX_BUTTON_") == short)
            })
            .ok_or_else(|| XboxError::UnknownButtonName(s.to_string()))
    }
}

pub const MICROSOFT_VENDOR_ID: u16 = 0x045E;

/// Xbox 360 Controller (wired USB).
pub const XBOX_360_WIRED_PID: u16 = 0x028E;
/// Xbox 360 Wireless Receiver for Windows.
pub const XBOX_360_WIRELESS_RECEIVER_PID: u16 = 0x0719;
/// Xbox One Controller (2013, wired).
pub const XBOX_ONE_PID: u16 = 0x02D1;
/// Xbox One S Controller (USB).
pub const XBOX_ONE_S_PID: u16 = 0x02EA;
/// Xbox Elite Wireless Controller Series 2 (USB).
pub const XBOX_ELITE_2_PID: u16 = 0x0B00;
/// Xbox Series X|S Controller (USB).
pub const XBOX_SERIES_PID: u16 = 0x0B12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XboxModel {
    Xbox360,
    Xbox360Wireless,
    XboxOne,
    XboxOneS,
    Elite2,
    Series,
    Unknown,
}

impl XboxModel {
    pub fn from_product_id(product_id: u16) -> Self {
        match product_id {
            XBOX_360_WIRED_PID => Self::Xbox360,
            XBOX_360_WIRELESS_RECEIVER_PID => Self::Xbox360Wireless,
            XBOX_ONE_PID => Self::XboxOne,
            XBOX_ONE_S_PID => Self::XboxOneS,
            XBOX_ELITE_2_PID => Self::Elite2,
            XBOX_SERIES_PID => Self::Series,
            _ => Self::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Xbox360 => "Xbox 360 Controller",
            Self::Xbox360Wireless => "Xbox 360 Wireless Receiver",
            Self::XboxOne => "Xbox One Controller",
            Self::XboxOneS => "Xbox One S Controller",
            Self::Elite2 => "Xbox Elite Series 2 Controller",
            Self::Series => "Xbox Series X|S Controller",
            Self::Unknown => "Unknown Xbox Device",
        }
    }

    /// Whether the device sends the bare 20-byte report decoded by
    /// [`Xbox360InputReport`](crate::Xbox360InputReport).
    ///
    /// The wireless receiver wraps the same payload in a 4-byte header;
    /// strip it before decoding.
    pub fn uses_xbox360_report(&self) -> bool {
        matches!(self, Self::Xbox360)
    }
}

pub fn xbox_model_from_info(vendor_id: u16, product_id: u16) -> XboxModel {
    if vendor_id != MICROSOFT_VENDOR_ID {
        return XboxModel::Unknown;
    }
    XboxModel::from_product_id(product_id)
}

pub fn is_xbox_device(vendor_id: u16) -> bool {
    vendor_id == MICROSOFT_VENDOR_ID
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_axis_constants_match_enum() {
        assert_eq!(XboxAxis::LeftAnalogX.index(), XBOX_AXIS_LEFT_ANALOG_X);
        assert_eq!(XboxAxis::LeftAnalogY.index(), XBOX_AXIS_LEFT_ANALOG_Y);
        assert_eq!(XboxAxis::Triggers.index(), XBOX_AXIS_TRIGGERS);
        assert_eq!(XboxAxis::RightAnalogY.index(), XBOX_AXIS_RIGHT_ANALOG_Y);
        assert_eq!(XboxAxis::RightAnalogX.index(), XBOX_AXIS_RIGHT_ANALOG_X);
    }

    #[test]
    fn test_button_constants_match_enum() {
        assert_eq!(XboxButton::A.index(), XBOX_BUTTON_A);
        assert_eq!(XboxButton::Y.index(), XBOX_BUTTON_Y);
        assert_eq!(XboxButton::Start.index(), XBOX_BUTTON_START);
        assert_eq!(
            XboxButton::RightAnalogStick.index(),
            XBOX_BUTTON_RIGHT_ANALOG_STICK
        );
        assert_eq!(XboxButton::DpadWest.index(), XBOX_BUTTON_DPAD_WEST);
    }

    #[test]
    fn test_dpad_aliases_share_slot() {
        assert_eq!(XBOX_BUTTON_DPAD_NORTH, XBOX_BUTTON_DPAD_UP);
        assert_eq!(XBOX_BUTTON_DPAD_EAST, XBOX_BUTTON_DPAD_RIGHT);
        assert_eq!(XBOX_BUTTON_DPAD_SOUTH, XBOX_BUTTON_DPAD_DOWN);
        assert_eq!(XBOX_BUTTON_DPAD_WEST, XBOX_BUTTON_DPAD_LEFT);
        assert_eq!(XboxButton::DPAD_UP, XboxButton::DpadNorth);
        assert_eq!(XboxButton::DPAD_LEFT.index(), XBOX_BUTTON_DPAD_LEFT);
    }

    #[test]
    fn test_axis_from_str() -> Result<(), XboxError> {
        assert_eq!("XBOX_AXIS_TRIGGERS".parse::<XboxAxis>()?, XboxAxis::Triggers);
        assert_eq!("right_analog_y".parse::<XboxAxis>()?, XboxAxis::RightAnalogY);
        assert_eq!(" LEFT_ANALOG_X ".parse::<XboxAxis>()?, XboxAxis::LeftAnalogX);
        assert!(matches!(
            "THROTTLE".parse::<XboxAxis>(),
            Err(XboxError::UnknownAxisName(_))
        ));
        Ok(())
    }

    #[test]
    fn test_button_from_str_accepts_aliases() -> Result<(), XboxError> {
        assert_eq!("XBOX_BUTTON_DPAD_UP".parse::<XboxButton>()?, XboxButton::DpadNorth);
        assert_eq!("dpad_right".parse::<XboxButton>()?, XboxButton::DpadEast);
        assert_eq!("DPAD_SOUTH".parse::<XboxButton>()?, XboxButton::DpadSouth);
        assert_eq!("a".parse::<XboxButton>()?, XboxButton::A);
        assert!(matches!(
            "GUIDE".parse::<XboxButton>(),
            Err(XboxError::UnknownButtonName(_))
        ));
        Ok(())
    }

    #[test]
    fn test_button_from_index_reserved_slots() {
        assert_eq!(XboxButton::from_index(13), Some(XboxButton::DpadWest));
        for index in NAMED_XBOX_BUTTONS..NUM_XBOX_BUTTONS {
            assert_eq!(XboxButton::from_index(index), None);
        }
    }

    #[test]
    fn test_alias_names_only_on_dpad() {
        let aliased: Vec<_> = XboxButton::ALL
            .into_iter()
            .filter(|b| b.alias_name().is_some())
            .collect();
        assert_eq!(
            aliased,
            vec![
                XboxButton::DpadNorth,
                XboxButton::DpadEast,
                XboxButton::DpadSouth,
                XboxButton::DpadWest
            ]
        );
    }

    #[test]
    fn test_model_from_pid() {
        assert_eq!(
            XboxModel::from_product_id(XBOX_360_WIRED_PID),
            XboxModel::Xbox360
        );
        assert_eq!(
            XboxModel::from_product_id(XBOX_SERIES_PID),
            XboxModel::Series
        );
        assert_eq!(XboxModel::from_product_id(0xFFFF), XboxModel::Unknown);
    }

    #[test]
    fn test_model_from_info_requires_microsoft_vid() {
        assert_eq!(
            xbox_model_from_info(MICROSOFT_VENDOR_ID, XBOX_360_WIRED_PID),
            XboxModel::Xbox360
        );
        assert_eq!(
            xbox_model_from_info(0x046D, XBOX_360_WIRED_PID),
            XboxModel::Unknown
        );
        assert!(is_xbox_device(0x045E));
        assert!(!is_xbox_device(0x046D));
    }

    #[test]
    fn test_uses_xbox360_report() {
        assert!(XboxModel::Xbox360.uses_xbox360_report());
        assert!(!XboxModel::Xbox360Wireless.uses_xbox360_report());
        assert!(!XboxModel::Series.uses_xbox360_report());
        assert!(!XboxModel::Unknown.uses_xbox360_report());
    }

    #[test]
    fn test_symbol_table_in_range_and_distinct() {
        let axes = [
            XBOX_AXIS_LEFT_ANALOG_X,
            XBOX_AXIS_LEFT_ANALOG_Y,
            XBOX_AXIS_TRIGGERS,
            XBOX_AXIS_RIGHT_ANALOG_Y,
            XBOX_AXIS_RIGHT_ANALOG_X,
        ];
        let buttons = [
            XBOX_BUTTON_A,
            XBOX_BUTTON_B,
            XBOX_BUTTON_X,
            XBOX_BUTTON_Y,
            XBOX_BUTTON_LEFT_BUMPER,
            XBOX_BUTTON_RIGHT_BUMPER,
            XBOX_BUTTON_BACK,
            XBOX_BUTTON_START,
            XBOX_BUTTON_LEFT_ANALOG_STICK,
            XBOX_BUTTON_RIGHT_ANALOG_STICK,
            XBOX_BUTTON_DPAD_NORTH,
            XBOX_BUTTON_DPAD_EAST,
            XBOX_BUTTON_DPAD_SOUTH,
            XBOX_BUTTON_DPAD_WEST,
        ];

        assert!(axes.iter().all(|i| *i < NUM_XBOX_AXES));
        assert!(buttons.iter().all(|i| *i < NUM_XBOX_BUTTONS));
        assert_eq!(axes.iter().collect::<HashSet<_>>().len(), NUM_XBOX_AXES);
        assert_eq!(buttons.iter().collect::<HashSet<_>>().len(), NAMED_XBOX_BUTTONS);

        for (constant, axis) in axes.iter().zip(XboxAxis::ALL) {
            assert_eq!(*constant, axis.index(), "{axis}");
        }
        for (constant, button) in buttons.iter().zip(XboxButton::ALL) {
            assert_eq!(*constant, button.index(), "{button}");
        }
    }

    #[test]
    fn test_serde_uses_symbol_names() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&XboxAxis::Triggers)?,
            "\"XBOX_AXIS_TRIGGERS\""
        );
        for button in XboxButton::ALL {
            assert_eq!(serde_json::to_string(&button)?, format!("\"{}\"", button.name()));
            let back: XboxButton = serde_json::from_str(&format!("\"{}\"", button.name()))?;
            assert_eq!(back, button);
        }
        let alias: XboxButton = serde_json::from_str("\"XBOX_BUTTON_DPAD_LEFT\"")?;
        assert_eq!(alias, XboxButton::DpadWest);
        Ok(())
    }
}
