use std::time::Duration;

use bevy::input::gamepad::GamepadAxisType;

use crate::input::{AxisCode, Button, InputReader};

/// Turns a continuous axis into discrete crossings of `threshold`.
///
/// Once the axis goes past `threshold`, further readings past it are
/// reported as `0.0`, until either the axis comes back under `threshold`
/// or `repeat` elapsed since the last reported crossing.
/// With `repeat: None`, only coming back under `threshold` re-arms.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    threshold: f32,
    repeat: Option<Duration>,
    past_threshold: bool,
    last_crossing: Duration,
}
impl Debounce {
    pub fn new(threshold: f32, repeat: Option<Duration>) -> Self {
        Debounce {
            threshold: threshold.abs(),
            repeat,
            past_threshold: false,
            last_crossing: Duration::ZERO,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn repeat(&self) -> Option<Duration> {
        self.repeat
    }

    fn is_past(&self, value: f32) -> bool {
        value.abs() > self.threshold
    }

    /// Whether `value` read at `now` would be filtered out.
    fn suppresses(&self, value: f32, now: Duration) -> bool {
        let waited = now.saturating_sub(self.last_crossing);
        let held = match self.repeat {
            Some(repeat) => waited < repeat,
            None => true,
        };
        self.is_past(value) && self.past_threshold && held
    }

    /// Filter `value` read at time `now`.
    pub fn filter(&mut self, value: f32, now: Duration) -> f32 {
        if self.suppresses(value, now) {
            return 0.0;
        }
        self.past_threshold = self.is_past(value);
        if self.past_threshold {
            self.last_crossing = now;
        }
        value
    }

    /// What [`Self::filter`] would return, without recording the reading.
    pub fn peek(&self, value: f32, now: Duration) -> f32 {
        if self.suppresses(value, now) {
            0.0
        } else {
            value
        }
    }
}

#[derive(Debug, Clone)]
enum AxisKind {
    Zero,
    Raw(AxisCode),
    Inverted(Box<AxisKind>),
    Composite(Vec<AxisKind>),
    FromButton { button: Button, pressed_value: f32 },
    Debounced { inner: Box<AxisKind>, debounce: Debounce },
}
impl AxisKind {
    fn value(&mut self, input: &dyn InputReader) -> f32 {
        match self {
            AxisKind::Zero => 0.0,
            AxisKind::Raw(code) => input.axis(*code),
            AxisKind::Inverted(inner) => -inner.value(input),
            AxisKind::Composite(axes) => axes
                .iter_mut()
                .map(|axis| axis.value(input))
                .find(|value| *value != 0.0)
                .unwrap_or(0.0),
            AxisKind::FromButton { button, pressed_value } => {
                if button.is_pressed(input) {
                    *pressed_value
                } else {
                    0.0
                }
            }
            AxisKind::Debounced { inner, debounce } => {
                let value = inner.value(input);
                debounce.filter(value, input.elapsed())
            }
        }
    }

    fn peek(&self, input: &dyn InputReader) -> f32 {
        match self {
            AxisKind::Zero => 0.0,
            AxisKind::Raw(code) => input.axis(*code),
            AxisKind::Inverted(inner) => -inner.peek(input),
            AxisKind::Composite(axes) => axes
                .iter()
                .map(|axis| axis.peek(input))
                .find(|value| *value != 0.0)
                .unwrap_or(0.0),
            AxisKind::FromButton { button, pressed_value } => {
                if button.is_pressed(input) {
                    *pressed_value
                } else {
                    0.0
                }
            }
            AxisKind::Debounced { inner, debounce } => {
                debounce.peek(inner.peek(input), input.elapsed())
            }
        }
    }
}

/// An analog input, as seen by a navigation node.
///
/// Build one from a raw [`AxisCode`], then stack transforms:
///
/// ```rust
/// # use bevy_focus_navigation::input::{Axis, DEBOUNCE_THRESHOLD};
/// # use bevy::input::{gamepad::GamepadAxisType, keyboard::KeyCode};
/// let horizontal = Axis::new(GamepadAxisType::LeftStickX)
///     .invert()
///     .with_buttons(KeyCode::ArrowLeft.into(), KeyCode::ArrowRight.into())
///     .debounce(DEBOUNCE_THRESHOLD, None);
/// ```
///
/// A disabled axis always reads `0.0`.
#[derive(Debug, Clone)]
pub struct Axis {
    kind: AxisKind,
    enabled: bool,
}
impl Default for Axis {
    fn default() -> Self {
        Self::zero()
    }
}
impl From<AxisCode> for Axis {
    fn from(code: AxisCode) -> Self {
        Axis::new(code)
    }
}
impl From<GamepadAxisType> for Axis {
    fn from(axis: GamepadAxisType) -> Self {
        Axis::new(axis)
    }
}

impl Axis {
    fn with_kind(kind: AxisKind) -> Self {
        Axis { kind, enabled: true }
    }

    pub fn new(code: impl Into<AxisCode>) -> Self {
        Self::with_kind(AxisKind::Raw(code.into()))
    }

    /// An axis stuck at `0.0`.
    pub fn zero() -> Self {
        Self::with_kind(AxisKind::Zero)
    }

    /// Reads `pressed_value` while `button` is held, `0.0` otherwise.
    pub fn from_button(button: Button, pressed_value: f32) -> Self {
        Self::with_kind(AxisKind::FromButton { button, pressed_value })
    }

    pub fn invert(self) -> Self {
        Axis {
            kind: AxisKind::Inverted(Box::new(self.kind)),
            enabled: self.enabled,
        }
    }

    /// Add digital inputs to this axis: `positive` reads as `1.0`,
    /// `negative` as `-1.0`.
    ///
    /// The first non-zero source wins, starting with `self`.
    pub fn with_buttons(self, positive: Button, negative: Button) -> Self {
        Axis {
            kind: AxisKind::Composite(vec![
                self.kind,
                AxisKind::FromButton { button: positive, pressed_value: 1.0 },
                AxisKind::FromButton { button: negative, pressed_value: -1.0 },
            ]),
            enabled: self.enabled,
        }
    }

    /// See [`Debounce`].
    pub fn debounce(self, threshold: f32, repeat: Option<Duration>) -> Self {
        Axis {
            kind: AxisKind::Debounced {
                inner: Box::new(self.kind),
                debounce: Debounce::new(threshold, repeat),
            },
            enabled: self.enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The raw axes this axis reads from.
    pub fn codes(&self) -> Vec<AxisCode> {
        fn collect(kind: &AxisKind, codes: &mut Vec<AxisCode>) {
            match kind {
                AxisKind::Raw(code) => codes.push(*code),
                AxisKind::Inverted(inner) | AxisKind::Debounced { inner, .. } => {
                    collect(inner, codes)
                }
                AxisKind::Composite(axes) => axes.iter().for_each(|a| collect(a, codes)),
                AxisKind::Zero | AxisKind::FromButton { .. } => {}
            }
        }
        let mut codes = Vec::new();
        collect(&self.kind, &mut codes);
        codes
    }

    /// Current value of the axis.
    ///
    /// Takes `&mut self` because debounced axes track threshold crossings.
    pub fn value(&mut self, input: &dyn InputReader) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.kind.value(input)
    }

    /// Current value of the axis, leaving debounce state untouched.
    pub fn peek(&self, input: &dyn InputReader) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.kind.peek(input)
    }
}

#[cfg(test)]
mod tests {
    use bevy::input::keyboard::KeyCode;

    use super::*;
    use crate::input::{InputSnapshot, AXIS_REPEAT_INTERVAL, DEBOUNCE_THRESHOLD};

    const STICK: AxisCode = AxisCode::Virtual(0);

    fn crossings(axis: &mut Axis, input: &mut InputSnapshot, values: &[f32]) -> Vec<usize> {
        let mut ticks = Vec::new();
        for (i, value) in values.iter().enumerate() {
            input.set_axis(STICK, *value).advance(Duration::from_millis(16));
            if axis.value(input).abs() > DEBOUNCE_THRESHOLD {
                ticks.push(i + 1);
            }
        }
        ticks
    }

    #[test]
    fn debounce_suppresses_held_axis() {
        let mut input = InputSnapshot::new();
        let mut axis = Axis::new(STICK).debounce(DEBOUNCE_THRESHOLD, None);
        let ticks = crossings(&mut axis, &mut input, &[0.0, 0.9, 0.9, 0.0, 0.9]);
        assert_eq!(ticks, vec![2, 5]);
    }

    #[test]
    fn debounce_repeats_after_interval() {
        let mut input = InputSnapshot::new();
        let mut axis = Axis::new(STICK).debounce(DEBOUNCE_THRESHOLD, Some(AXIS_REPEAT_INTERVAL));

        input.set_axis(STICK, -0.9);
        assert_eq!(axis.value(&input), -0.9);
        input.advance(Duration::from_millis(100));
        assert_eq!(axis.value(&input), 0.0);
        input.advance(AXIS_REPEAT_INTERVAL);
        assert_eq!(axis.value(&input), -0.9);
    }

    #[test]
    fn peek_leaves_debounce_untouched() {
        let mut input = InputSnapshot::new();
        let mut axis = Axis::new(STICK).invert().debounce(DEBOUNCE_THRESHOLD, None);

        input.set_axis(STICK, 0.9);
        assert_eq!(axis.peek(&input), -0.9);
        assert_eq!(axis.peek(&input), -0.9);
        assert_eq!(axis.value(&input), -0.9);
        assert_eq!(axis.peek(&input), 0.0);
        assert_eq!(axis.value(&input), 0.0);
    }

    #[test]
    fn inverted_axis_with_buttons() {
        let mut input = InputSnapshot::new();
        let mut axis = Axis::new(STICK)
            .invert()
            .with_buttons(KeyCode::ArrowLeft.into(), KeyCode::ArrowRight.into());

        input.set_axis(STICK, 0.5);
        assert_eq!(axis.value(&input), -0.5);

        // The stick takes priority while it's not at rest.
        input.press(KeyCode::ArrowLeft);
        assert_eq!(axis.value(&input), -0.5);

        input.set_axis(STICK, 0.0);
        assert_eq!(axis.value(&input), 1.0);

        input.release(KeyCode::ArrowLeft).press(KeyCode::ArrowRight);
        assert_eq!(axis.value(&input), -1.0);
        assert_eq!(axis.codes(), vec![STICK]);
    }

    #[test]
    fn disabled_axis_reads_zero() {
        let mut input = InputSnapshot::new();
        input.set_axis(STICK, 1.0);
        let mut axis = Axis::new(STICK);
        axis.set_enabled(false);
        assert_eq!(axis.value(&input), 0.0);
        assert_eq!(Axis::zero().value(&input), 0.0);
    }
}
