//! Decoded controller state.
//!
//! [`XboxControllerState`] holds exactly [`NUM_XBOX_AXES`] normalized analog
//! readings and [`NUM_XBOX_BUTTONS`] button slots. Typed indexing with
//! [`XboxAxis`] / [`XboxButton`] can never go out of range; raw `usize`
//! lookups go through [`XboxControllerState::axis_at`] and
//! [`XboxControllerState::button_at`], which return `None` instead of
//! panicking.

use crate::{
    DpadDirection, NUM_XBOX_AXES, NUM_XBOX_BUTTONS, XboxAxis, XboxButton, XboxInputEvent,
};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Smallest axis change reported by [`XboxControllerState::changes_since`].
pub const AXIS_CHANGE_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawControllerState")]
pub struct XboxControllerState {
    axes: [f32; NUM_XBOX_AXES],
    buttons: [bool; NUM_XBOX_BUTTONS],
}

/// Wire form of [`XboxControllerState`]; normalized on load.
#[derive(Deserialize)]
struct RawControllerState {
    axes: [f32; NUM_XBOX_AXES],
    buttons: [bool; NUM_XBOX_BUTTONS],
}

impl From<RawControllerState> for XboxControllerState {
    /// Axes are clamped like [`XboxControllerState::set_axis`] and reserved
    /// button slots are dropped.
    fn from(raw: RawControllerState) -> Self {
        let mut state = Self::from_axes(raw.axes);
        for button in XboxButton::ALL {
            if let Some(pressed) = raw.buttons.get(button.index()) {
                state.set_button(button, *pressed);
            }
        }
        state
    }
}

impl XboxControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with the given axes and every button released.
    pub fn from_axes(axes: [f32; NUM_XBOX_AXES]) -> Self {
        let mut state = Self::default();
        for axis in XboxAxis::ALL {
            if let Some(value) = axes.get(axis.index()) {
                state.set_axis(axis, *value);
            }
        }
        state
    }

    pub fn axes(&self) -> &[f32; NUM_XBOX_AXES] {
        &self.axes
    }

    pub fn buttons(&self) -> &[bool; NUM_XBOX_BUTTONS] {
        &self.buttons
    }

    pub fn axis(&self, axis: XboxAxis) -> f32 {
        self.axes.get(axis.index()).copied().unwrap_or_default()
    }

    pub fn button(&self, button: XboxButton) -> bool {
        self.buttons.get(button.index()).copied().unwrap_or_default()
    }

    pub fn axis_at(&self, index: usize) -> Option<f32> {
        self.axes.get(index).copied()
    }

    pub fn button_at(&self, index: usize) -> Option<bool> {
        self.buttons.get(index).copied()
    }

    /// Store `value` clamped to `[-1.0, 1.0]`. NaN is stored as `0.0`.
    pub fn set_axis(&mut self, axis: XboxAxis, value: f32) {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
        if let Some(slot) = self.axes.get_mut(axis.index()) {
            *slot = value;
        }
    }

    pub fn set_button(&mut self, button: XboxButton, pressed: bool) {
        if let Some(slot) = self.buttons.get_mut(button.index()) {
            *slot = pressed;
        }
    }

    /// Pressed named buttons in index order.
    pub fn pressed_buttons(&self) -> impl Iterator<Item = XboxButton> + '_ {
        XboxButton::ALL
            .into_iter()
            .filter(move |button| self.button(*button))
    }

    pub fn dpad_direction(&self) -> DpadDirection {
        DpadDirection::from_cardinals(
            self.button(XboxButton::DPAD_UP),
            self.button(XboxButton::DPAD_RIGHT),
            self.button(XboxButton::DPAD_DOWN),
            self.button(XboxButton::DPAD_LEFT),
        )
    }

    /// Events that turn `previous` into `self`: axis moves first, then
    /// button edges, each in index order.
    pub fn changes_since(&self, previous: &XboxControllerState) -> Vec<XboxInputEvent> {
        let axis_events = XboxAxis::ALL.into_iter().filter_map(|axis| {
            let value = self.axis(axis);
            ((value - previous.axis(axis)).abs() > AXIS_CHANGE_EPSILON)
                .then_some(XboxInputEvent::AxisMoved { axis, value })
        });

        let button_events = XboxButton::ALL.into_iter().filter_map(|button| {
            match (previous.button(button), self.button(button)) {
                (false, true) => Some(XboxInputEvent::ButtonPressed { button }),
                (true, false) => Some(XboxInputEvent::ButtonReleased { button }),
                _ => None,
            }
        });

        axis_events.chain(button_events).collect()
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: &XboxInputEvent) {
        match *event {
            XboxInputEvent::AxisMoved { axis, value } => self.set_axis(axis, value),
            XboxInputEvent::ButtonPressed { button } => self.set_button(button, true),
            XboxInputEvent::ButtonReleased { button } => self.set_button(button, false),
        }
    }
}

impl Index<XboxAxis> for XboxControllerState {
    type Output = f32;

    fn index(&self, axis: XboxAxis) -> &f32 {
        const ZERO: f32 = 0.0;
        self.axes.get(axis.index()).unwrap_or(&ZERO)
    }
}

impl Index<XboxButton> for XboxControllerState {
    type Output = bool;

    fn index(&self, button: XboxButton) -> &bool {
        self.buttons.get(button.index()).unwrap_or(&false)
    }
}
