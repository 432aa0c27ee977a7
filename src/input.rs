//! Input sources consumed by navigation nodes.
//!
//! Navigation never talks to devices directly. Each tick, it receives an
//! [`InputReader`]: a view of the current frame's input state. What a node
//! does with that state is described by [`Button`] and [`Axis`] values,
//! small composable transforms (inversion, debouncing, combos…) over raw
//! [`ButtonCode`]s and [`AxisCode`]s.
//!
//! [`InputSnapshot`] is an owned `InputReader` you can script by hand. The
//! [`NavigationPlugin`](crate::NavigationPlugin) uses
//! [`BevyInput`](crate::systems::BevyInput) instead.
use std::time::Duration;

use bevy::input::{gamepad::GamepadAxisType, gamepad::GamepadButtonType, keyboard::KeyCode};
use bevy::utils::{HashMap, HashSet};

mod axis;
mod button;

pub use axis::{Axis, Debounce};
pub use button::Button;

/// Axis readings past this value (in either direction) count as a move.
pub const DEBOUNCE_THRESHOLD: f32 = 0.7;

/// Time after which a held axis repeats its move, for debounced axes that repeat.
pub const AXIS_REPEAT_INTERVAL: Duration = Duration::from_millis(400);

/// A physical or virtual button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCode {
    Key(KeyCode),
    /// A button on any connected gamepad.
    Gamepad(GamepadButtonType),
    /// Not tied to a device, for scripted or remote input.
    Virtual(u32),
}

/// A physical or virtual analog axis, in the `[-1, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisCode {
    /// An axis on any connected gamepad.
    Gamepad(GamepadAxisType),
    /// Not tied to a device, for scripted or remote input.
    Virtual(u32),
}

impl From<KeyCode> for ButtonCode {
    fn from(key: KeyCode) -> Self {
        ButtonCode::Key(key)
    }
}
impl From<GamepadButtonType> for ButtonCode {
    fn from(button: GamepadButtonType) -> Self {
        ButtonCode::Gamepad(button)
    }
}
impl From<GamepadAxisType> for AxisCode {
    fn from(axis: GamepadAxisType) -> Self {
        AxisCode::Gamepad(axis)
    }
}

/// The state of input devices for the current frame.
pub trait InputReader {
    /// Whether `button` is held down (level-triggered).
    fn pressed(&self, button: ButtonCode) -> bool;

    /// Whether `button` went down this frame (edge-triggered).
    fn just_pressed(&self, button: ButtonCode) -> bool;

    /// Current value of `axis`, `0.0` if unknown.
    fn axis(&self, axis: AxisCode) -> f32;

    /// Time elapsed since startup, used for debouncing.
    fn elapsed(&self) -> Duration;
}

/// An [`InputReader`] holding its own state.
///
/// Calls to [`press`](Self::press) register both a held and a "just pressed"
/// button; [`next_frame`](Self::next_frame) forgets the "just pressed" edges
/// the way an input system does between two frames.
#[derive(Debug, Default, Clone)]
pub struct InputSnapshot {
    pressed: HashSet<ButtonCode>,
    just_pressed: HashSet<ButtonCode>,
    axes: HashMap<AxisCode, f32>,
    elapsed: Duration,
}
impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: impl Into<ButtonCode>) -> &mut Self {
        let button = button.into();
        if self.pressed.insert(button) {
            self.just_pressed.insert(button);
        }
        self
    }

    pub fn release(&mut self, button: impl Into<ButtonCode>) -> &mut Self {
        let button = button.into();
        self.pressed.remove(&button);
        self.just_pressed.remove(&button);
        self
    }

    pub fn set_axis(&mut self, axis: impl Into<AxisCode>, value: f32) -> &mut Self {
        self.axes.insert(axis.into(), value.clamp(-1.0, 1.0));
        self
    }

    pub fn advance(&mut self, delta: Duration) -> &mut Self {
        self.elapsed += delta;
        self
    }

    /// Start a new frame: clear edges, keep held buttons and axis values.
    pub fn next_frame(&mut self) -> &mut Self {
        self.just_pressed.clear();
        self
    }

    /// Shortcut for `release(button).press(button)`: produces a fresh edge
    /// even when `button` is already held.
    pub fn tap(&mut self, button: impl Into<ButtonCode>) -> &mut Self {
        let button = button.into();
        self.release(button).press(button)
    }
}

impl InputReader for InputSnapshot {
    fn pressed(&self, button: ButtonCode) -> bool {
        self.pressed.contains(&button)
    }
    fn just_pressed(&self, button: ButtonCode) -> bool {
        self.just_pressed.contains(&button)
    }
    fn axis(&self, axis: AxisCode) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_edges_last_one_frame() {
        let mut input = InputSnapshot::new();
        input.press(KeyCode::Enter);
        assert!(input.just_pressed(ButtonCode::Key(KeyCode::Enter)));
        assert!(input.pressed(ButtonCode::Key(KeyCode::Enter)));

        input.next_frame();
        assert!(!input.just_pressed(ButtonCode::Key(KeyCode::Enter)));
        assert!(input.pressed(ButtonCode::Key(KeyCode::Enter)));

        // Holding a button doesn't produce a new edge.
        input.press(KeyCode::Enter);
        assert!(!input.just_pressed(ButtonCode::Key(KeyCode::Enter)));

        input.tap(KeyCode::Enter);
        assert!(input.just_pressed(ButtonCode::Key(KeyCode::Enter)));
    }

    #[test]
    fn snapshot_axes_are_clamped() {
        let mut input = InputSnapshot::new();
        input.set_axis(AxisCode::Virtual(0), 3.0);
        assert_eq!(input.axis(AxisCode::Virtual(0)), 1.0);
        assert_eq!(input.axis(AxisCode::Virtual(1)), 0.0);
    }
}
