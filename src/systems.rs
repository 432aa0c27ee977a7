//! System for the navigation tree and default input mapping to get started
use std::time::Duration;

use bevy::ecs::system::SystemParam;
use bevy::input::Axis as InputAxis;
use bevy::prelude::*;

use crate::{
    error::NavError,
    input::{self, AxisCode, ButtonCode, InputReader},
    node::Movement,
    NavEvent, NavTree,
};

/// Control default ui navigation input buttons
///
/// Each field is a binding used by the [`Button`](input::Button)s,
/// [`Axis`](input::Axis) and [`Movement`]s returned by the methods of this
/// resource. Gamepad bindings are listened on all connected gamepads.
#[derive(Resource, Debug, Clone)]
pub struct InputMapping {
    /// X axis of gamepad stick
    pub move_x: GamepadAxisType,
    /// Y axis of gamepad stick
    pub move_y: GamepadAxisType,
    /// Gamepad button for selecting the focused item
    pub action_button: GamepadButtonType,
    /// Gamepad button for leaving the current menu
    pub cancel_button: GamepadButtonType,
    /// Gamepad d-pad buttons, in up, down, left, right order
    pub dpad: [GamepadButtonType; 4],
    /// Keyboard keys for up, down, left, right
    pub keys: [KeyCode; 4],
    /// Alternative keyboard keys for up, down, left, right
    pub keys_alt: [KeyCode; 4],
    /// Keyboard key for selecting the focused item
    pub key_action: KeyCode,
    /// Keyboard key for leaving the current menu
    pub key_cancel: KeyCode,
    /// If set, a held direction repeats its move after this delay
    pub repeat: Option<Duration>,
}
impl Default for InputMapping {
    fn default() -> Self {
        use GamepadButtonType::{DPadDown, DPadLeft, DPadRight, DPadUp};
        InputMapping {
            move_x: GamepadAxisType::LeftStickX,
            move_y: GamepadAxisType::LeftStickY,
            action_button: GamepadButtonType::South,
            cancel_button: GamepadButtonType::East,
            dpad: [DPadUp, DPadDown, DPadLeft, DPadRight],
            keys: [KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyD],
            keys_alt: [
                KeyCode::ArrowUp,
                KeyCode::ArrowDown,
                KeyCode::ArrowLeft,
                KeyCode::ArrowRight,
            ],
            key_action: KeyCode::Enter,
            key_cancel: KeyCode::Escape,
            repeat: Some(input::AXIS_REPEAT_INTERVAL),
        }
    }
}

/// Index into the direction arrays of [`InputMapping`].
#[derive(Clone, Copy)]
enum Dir {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl InputMapping {
    fn direction(&self, dir: Dir) -> input::Button {
        let i = dir as usize;
        input::Button::any(vec![
            self.keys[i].into(),
            self.keys_alt[i].into(),
            self.dpad[i].into(),
        ])
    }

    /// Button selecting the focused item.
    pub fn select(&self) -> input::Button {
        input::Button::any(vec![self.key_action.into(), self.action_button.into()])
    }

    /// Button leaving the current menu.
    pub fn cancel(&self) -> input::Button {
        input::Button::any(vec![self.key_cancel.into(), self.cancel_button.into()])
    }

    fn stick(&self, axis: GamepadAxisType) -> input::Axis {
        input::Axis::new(axis)
    }

    fn along(&self, axis: input::Axis) -> Movement {
        match self.repeat {
            Some(repeat) => Movement::repeating_axis(axis, repeat),
            None => Movement::axis(axis),
        }
    }

    /// Movement for a menu laid out top to bottom.
    pub fn vertical(&self) -> Movement {
        let (up, down) = (self.direction(Dir::Up), self.direction(Dir::Down));
        self.along(self.stick(self.move_y).with_buttons(up, down))
    }

    /// Movement for a menu laid out left to right.
    pub fn horizontal(&self) -> Movement {
        let (left, right) = (self.direction(Dir::Left), self.direction(Dir::Right));
        self.along(self.stick(self.move_x).invert().with_buttons(left, right))
    }

    /// Movement for a grid menu of `items_per_row` columns.
    ///
    /// Fails if `items_per_row` is zero.
    pub fn grid(&self, items_per_row: usize) -> Result<Movement, NavError> {
        let dpad = [Dir::Up, Dir::Down, Dir::Left, Dir::Right].map(|dir| self.direction(dir));
        Movement::grid(
            self.stick(self.move_x),
            self.stick(self.move_y),
            dpad,
            items_per_row,
        )
    }
}

/// System parameter reading bevy's input resources as an [`InputReader`].
///
/// Requires bevy's `InputPlugin` and `TimePlugin`, both part of the
/// `DefaultPlugins`.
#[derive(SystemParam)]
pub struct BevyInput<'w> {
    keys: Res<'w, ButtonInput<KeyCode>>,
    gamepad_buttons: Res<'w, ButtonInput<GamepadButton>>,
    gamepad_axes: Res<'w, InputAxis<GamepadAxis>>,
    gamepads: Res<'w, Gamepads>,
    time: Res<'w, Time>,
}
impl<'w> BevyInput<'w> {
    fn any_gamepad(&self, button: GamepadButtonType, f: impl Fn(GamepadButton) -> bool) -> bool {
        self.gamepads
            .iter()
            .any(|pad| f(GamepadButton::new(pad, button)))
    }
}

impl<'w> InputReader for BevyInput<'w> {
    fn pressed(&self, button: ButtonCode) -> bool {
        match button {
            ButtonCode::Key(key) => self.keys.pressed(key),
            ButtonCode::Gamepad(ty) => self.any_gamepad(ty, |b| self.gamepad_buttons.pressed(b)),
            ButtonCode::Virtual(_) => false,
        }
    }
    fn just_pressed(&self, button: ButtonCode) -> bool {
        match button {
            ButtonCode::Key(key) => self.keys.just_pressed(key),
            ButtonCode::Gamepad(ty) => {
                self.any_gamepad(ty, |b| self.gamepad_buttons.just_pressed(b))
            }
            ButtonCode::Virtual(_) => false,
        }
    }
    fn axis(&self, axis: AxisCode) -> f32 {
        match axis {
            AxisCode::Gamepad(ty) => self
                .gamepads
                .iter()
                .filter_map(|pad| self.gamepad_axes.get(GamepadAxis::new(pad, ty)))
                .find(|value| *value != 0.0)
                .unwrap_or(0.0),
            AxisCode::Virtual(_) => 0.0,
        }
    }
    fn elapsed(&self) -> Duration {
        self.time.elapsed()
    }
}

/// Tick the [`NavTree`] roots with the current frame's input and send the
/// resulting [`NavEvent`]s.
pub fn tick_navigation(
    mut tree: ResMut<NavTree>,
    input: BevyInput,
    mut events: EventWriter<NavEvent>,
) {
    tree.tick(&input);
    for event in tree.drain_events() {
        events.send(event);
    }
}
