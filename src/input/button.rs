use std::time::Duration;

use bevy::input::{gamepad::GamepadButtonType, keyboard::KeyCode};

use crate::{
    error::NavError,
    input::{Axis, ButtonCode, InputReader},
};

#[derive(Debug, Clone)]
enum ButtonKind {
    Null,
    Raw(ButtonCode),
    Combo(Vec<Button>),
    Any(Vec<Button>),
    Debounced {
        inner: Box<Button>,
        interval: Duration,
        last_accepted: Option<Duration>,
    },
    FromAxis {
        axis: Box<Axis>,
        threshold: f32,
        last: f32,
    },
}

/// Whether `value` is past a signed `threshold`: above it when positive,
/// below it when negative.
fn past_threshold(value: f32, threshold: f32) -> bool {
    if threshold >= 0.0 {
        value > threshold
    } else {
        value < threshold
    }
}

/// A pressable input, as seen by a navigation node.
///
/// `Button`s are cheap values: each node holds its own copy, so debounce
/// state is never shared between two nodes bound to the same key.
///
/// A disabled button is never pressed.
#[derive(Debug, Clone)]
pub struct Button {
    kind: ButtonKind,
    enabled: bool,
}
impl Default for Button {
    fn default() -> Self {
        Self::null()
    }
}
impl From<ButtonCode> for Button {
    fn from(code: ButtonCode) -> Self {
        Button::new(code)
    }
}
impl From<KeyCode> for Button {
    fn from(key: KeyCode) -> Self {
        Button::new(key)
    }
}
impl From<GamepadButtonType> for Button {
    fn from(button: GamepadButtonType) -> Self {
        Button::new(button)
    }
}

impl Button {
    fn with_kind(kind: ButtonKind) -> Self {
        Button { kind, enabled: true }
    }

    /// A button bound to `code`.
    pub fn new(code: impl Into<ButtonCode>) -> Self {
        Self::with_kind(ButtonKind::Raw(code.into()))
    }

    /// A button that is never pressed.
    pub fn null() -> Self {
        Self::with_kind(ButtonKind::Null)
    }

    /// Pressed only when all of `buttons` are.
    ///
    /// Fails if there are less than two buttons.
    pub fn combo(buttons: Vec<Button>) -> Result<Self, NavError> {
        if buttons.len() < 2 {
            return Err(NavError::invalid(
                "buttons",
                "a button combo must have at least 2 buttons",
            ));
        }
        Ok(Self::with_kind(ButtonKind::Combo(buttons)))
    }

    /// Pressed when any of `buttons` is.
    pub fn any(buttons: Vec<Button>) -> Self {
        Self::with_kind(ButtonKind::Any(buttons))
    }

    /// Held while `axis` is past the signed `threshold`, for example a
    /// trigger or a stick direction used as a button.
    ///
    /// The press registers on the frame the axis comes back under
    /// `threshold`.
    pub fn from_axis(axis: impl Into<Axis>, threshold: f32) -> Self {
        Self::with_kind(ButtonKind::FromAxis {
            axis: Box::new(axis.into()),
            threshold,
            last: 0.0,
        })
    }

    /// Accept a new press at most once every `interval`.
    pub fn debounce(self, interval: Duration) -> Self {
        Self::with_kind(ButtonKind::Debounced {
            inner: Box::new(self),
            interval,
            last_accepted: None,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The raw codes this button listens to, in declaration order.
    ///
    /// Useful to display a prompt for the button.
    pub fn codes(&self) -> Vec<ButtonCode> {
        let mut codes = Vec::new();
        self.collect_codes(&mut codes);
        codes
    }

    fn collect_codes(&self, codes: &mut Vec<ButtonCode>) {
        match &self.kind {
            ButtonKind::Null => {}
            ButtonKind::Raw(code) => codes.push(*code),
            ButtonKind::Combo(buttons) | ButtonKind::Any(buttons) => {
                buttons.iter().for_each(|b| b.collect_codes(codes));
            }
            ButtonKind::Debounced { inner, .. } => inner.collect_codes(codes),
            ButtonKind::FromAxis { .. } => {}
        }
    }

    /// Whether the button is held down.
    pub fn is_pressed(&self, input: &dyn InputReader) -> bool {
        if !self.enabled {
            return false;
        }
        match &self.kind {
            ButtonKind::Null => false,
            ButtonKind::Raw(code) => input.pressed(*code),
            ButtonKind::Combo(buttons) => buttons.iter().all(|b| b.is_pressed(input)),
            ButtonKind::Any(buttons) => buttons.iter().any(|b| b.is_pressed(input)),
            ButtonKind::Debounced { inner, .. } => inner.is_pressed(input),
            ButtonKind::FromAxis { axis, threshold, .. } => {
                past_threshold(axis.peek(input), *threshold)
            }
        }
    }

    /// Whether the button was pressed this frame.
    ///
    /// Takes `&mut self` because debounced buttons remember when they last
    /// accepted a press.
    pub fn was_pressed(&mut self, input: &dyn InputReader) -> bool {
        if !self.enabled {
            return false;
        }
        match &mut self.kind {
            ButtonKind::Null => false,
            ButtonKind::Raw(code) => input.just_pressed(*code),
            ButtonKind::Combo(buttons) => buttons.iter_mut().all(|b| b.was_pressed(input)),
            ButtonKind::Any(buttons) => {
                // Poll every button so that all debounce states stay in sync.
                buttons
                    .iter_mut()
                    .fold(false, |acc, b| b.was_pressed(input) || acc)
            }
            ButtonKind::Debounced {
                inner,
                interval,
                last_accepted,
            } => {
                if !inner.was_pressed(input) {
                    return false;
                }
                let now = input.elapsed();
                let accepted = match *last_accepted {
                    Some(last) => now.saturating_sub(last) > *interval,
                    None => true,
                };
                if accepted {
                    *last_accepted = Some(now);
                }
                accepted
            }
            ButtonKind::FromAxis { axis, threshold, last } => {
                let value = axis.value(input);
                let released = past_threshold(*last, *threshold)
                    && !past_threshold(value, *threshold);
                *last = value;
                released
            }
        }
    }
}
