//! The navigation state machine of a single menu.
//!
//! A [`NavigationNode`] owns an [`ItemSource`], a select and a cancel
//! [`Button`], and a [`Movement`] deciding how directional input moves the
//! cursor. Hand-off of focus to child nodes is driven by the
//! [`NavTree`](crate::NavTree), since it needs access to both nodes.
use std::num::NonZeroUsize;
use std::{fmt, time::Duration};

use bevy::log::trace;

use crate::{
    error::NavError,
    events::{NavEvent, NavEvents, NoSound, NullNavEvents, Sound},
    input::{Axis, Button, InputReader, AXIS_REPEAT_INTERVAL, DEBOUNCE_THRESHOLD},
    items::{ItemSource, NavItem},
    tree::NodeId,
};

/// Focus hand-off policies of a [`NavigationNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSettings {
    /// While a child node has focus, this node ignores its own directional
    /// input. When `false`, both the child and this node move on the same
    /// tick.
    pub child_captures_input: bool,

    /// Selecting any item makes this node give up focus, whether or not the
    /// item has a child.
    pub auto_resolve_focus: bool,

    /// Hand focus to the child of the selected item as soon as the item is
    /// under the cursor, without waiting for a select press.
    pub auto_select: bool,
}
impl Default for NodeSettings {
    fn default() -> Self {
        NodeSettings {
            child_captures_input: true,
            auto_resolve_focus: false,
            auto_select: false,
        }
    }
}
impl NodeSettings {
    pub fn child_captures_input(self, child_captures_input: bool) -> Self {
        Self { child_captures_input, ..self }
    }
    pub fn auto_resolve_focus(self, auto_resolve_focus: bool) -> Self {
        Self { auto_resolve_focus, ..self }
    }
    pub fn auto_select(self, auto_select: bool) -> Self {
        Self { auto_select, ..self }
    }
}

/// A button that jumps straight to an item and selects it.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub button: Button,
    pub item: usize,
}
impl Shortcut {
    pub fn new(button: impl Into<Button>, item: usize) -> Self {
        Shortcut { button: button.into(), item }
    }
}

/// How directional input moves the cursor of a [`NavigationNode`].
#[derive(Debug, Clone)]
pub enum Movement {
    /// `next` moves to the next item, `previous` to the previous one.
    Buttons { next: Button, previous: Button },

    /// Readings below `-threshold` move to the next item,
    /// readings above `threshold` to the previous one.
    ///
    /// `axis` should be debounced, otherwise holding it moves every tick.
    Axis { axis: Axis, threshold: f32 },

    /// Items laid out in rows of `items_per_row`.
    ///
    /// `row` moves within a row and stops at row boundaries,
    /// `column` moves to the same column of the next/previous row.
    /// Both follow the sign convention of [`Movement::Axis`].
    Grid {
        row: Axis,
        column: Axis,
        items_per_row: NonZeroUsize,
        threshold: f32,
    },

    /// No cursor movement, each [`Shortcut`] selects its item directly.
    Shortcuts(Vec<Shortcut>),
}
impl Movement {
    pub fn buttons(next: impl Into<Button>, previous: impl Into<Button>) -> Self {
        Movement::Buttons { next: next.into(), previous: previous.into() }
    }

    /// Move with `axis`, debounced so that holding it moves only once.
    pub fn axis(axis: Axis) -> Self {
        Self::debounced_axis(axis, None)
    }

    /// Move with `axis`, repeating the move every `repeat` while held.
    pub fn repeating_axis(axis: Axis, repeat: Duration) -> Self {
        Self::debounced_axis(axis, Some(repeat))
    }

    fn debounced_axis(axis: Axis, repeat: Option<Duration>) -> Self {
        Movement::Axis {
            axis: axis.debounce(DEBOUNCE_THRESHOLD, repeat),
            threshold: DEBOUNCE_THRESHOLD,
        }
    }

    /// A vertical menu: `up` (or a positive `stick`) moves to the previous
    /// item, `down` to the next one.
    pub fn vertical(stick: Axis, up: Button, down: Button) -> Self {
        Self::repeating_axis(stick.with_buttons(up, down), AXIS_REPEAT_INTERVAL)
    }

    /// A horizontal menu: `left` (or a negative `stick`) moves to the
    /// previous item, `right` to the next one.
    pub fn horizontal(stick: Axis, left: Button, right: Button) -> Self {
        Self::repeating_axis(stick.invert().with_buttons(left, right), AXIS_REPEAT_INTERVAL)
    }

    /// A grid of `items_per_row` columns, moved with the horizontal and
    /// vertical axes of a stick plus a d-pad.
    ///
    /// Fails if `items_per_row` is zero.
    pub fn grid(
        stick_x: Axis,
        stick_y: Axis,
        dpad: [Button; 4],
        items_per_row: usize,
    ) -> Result<Self, NavError> {
        let items_per_row = NonZeroUsize::new(items_per_row)
            .ok_or_else(|| NavError::invalid("items_per_row", "a grid row can't be empty"))?;
        let [up, down, left, right] = dpad;
        let repeat = Some(AXIS_REPEAT_INTERVAL);
        Ok(Movement::Grid {
            row: stick_x
                .invert()
                .with_buttons(left, right)
                .debounce(DEBOUNCE_THRESHOLD, repeat),
            column: stick_y
                .with_buttons(up, down)
                .debounce(DEBOUNCE_THRESHOLD, repeat),
            items_per_row,
            threshold: DEBOUNCE_THRESHOLD,
        })
    }

    fn validate(&self, len: usize) -> Result<(), NavError> {
        match self {
            Movement::Shortcuts(shortcuts) if shortcuts.iter().any(|s| s.item >= len) => Err(
                NavError::invalid("shortcuts", "a shortcut points past the last item"),
            ),
            _ => Ok(()),
        }
    }
}

/// The input a node reacts to, for display purposes.
#[derive(Debug, Clone, Copy)]
pub enum InputRef<'a> {
    Button(&'a Button),
    Axis(&'a Axis),
    None,
}

/// Everything needed to draw input prompts for a node.
#[derive(Debug, Clone, Copy)]
pub struct NavHints<'a> {
    pub select: &'a Button,
    pub cancel: &'a Button,
    pub next: InputRef<'a>,
    pub previous: InputRef<'a>,
    pub has_next: bool,
    pub has_previous: bool,
}

/// The focus state of a node within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Unfocused,
    /// Focused, and handling input itself.
    FocusedSelf,
    /// Focused, but delegating input to the focused child of its selected item.
    FocusedChild,
}

/// The state machine of a menu, see the [module docs](self).
pub struct NavigationNode {
    items: ItemSource,
    select: Button,
    cancel: Button,
    movement: Movement,
    settings: NodeSettings,
    has_focus: bool,
    pending_select: bool,
    sound: Box<dyn Sound>,
    events: Box<dyn NavEvents>,
}
impl fmt::Debug for NavigationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationNode")
            .field("items", &self.items)
            .field("select", &self.select)
            .field("cancel", &self.cancel)
            .field("movement", &self.movement)
            .field("settings", &self.settings)
            .field("has_focus", &self.has_focus)
            .finish_non_exhaustive()
    }
}

impl NavigationNode {
    /// Create an unfocused node.
    ///
    /// Fails if `items` is empty or `movement` refers to missing items.
    pub fn new(
        select: impl Into<Button>,
        cancel: impl Into<Button>,
        movement: Movement,
        items: Vec<NavItem>,
    ) -> Result<Self, NavError> {
        let items = ItemSource::blurred(items)?;
        movement.validate(items.len())?;
        Ok(NavigationNode {
            items,
            select: select.into(),
            cancel: cancel.into(),
            movement,
            settings: NodeSettings::default(),
            has_focus: false,
            pending_select: false,
            sound: Box::new(NoSound),
            events: Box::new(NullNavEvents),
        })
    }

    pub fn with_settings(mut self, settings: NodeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Play `sound` each time the cursor moves.
    pub fn with_sound(mut self, sound: impl Sound + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_events(mut self, events: impl NavEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn settings(&self) -> NodeSettings {
        self.settings
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Give or remove focus.
    ///
    /// Focusing highlights the item under the cursor, unfocusing clears
    /// the focus of all items.
    pub fn set_focus(&mut self, focus: bool) {
        if focus == self.has_focus {
            return;
        }
        if focus {
            self.items.refresh();
        } else {
            self.pending_select = false;
            self.items.blur();
        }
        self.has_focus = focus;
    }

    pub fn items(&self) -> &ItemSource {
        &self.items
    }

    /// Replace the items of this node, moving the cursor back to the first one.
    ///
    /// The new items are focused only if the node has focus.
    ///
    /// Fails if `items` is empty or too short for the node's shortcuts.
    pub fn set_items(&mut self, items: Vec<NavItem>) -> Result<(), NavError> {
        self.movement.validate(items.len())?;
        let mut items = ItemSource::blurred(items)?;
        if self.has_focus {
            self.items.blur();
            items.refresh();
        }
        self.items = items;
        Ok(())
    }

    pub fn selected_index(&self) -> usize {
        self.items.selected_index()
    }

    pub fn selected_item(&self) -> &NavItem {
        self.items.selected()
    }

    pub fn has_next(&self) -> bool {
        self.items.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.items.has_previous()
    }

    pub fn select_button(&self) -> &Button {
        &self.select
    }

    pub fn cancel_button(&self) -> &Button {
        &self.cancel
    }

    pub fn select_button_mut(&mut self) -> &mut Button {
        &mut self.select
    }

    pub fn cancel_button_mut(&mut self) -> &mut Button {
        &mut self.cancel
    }

    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    /// The input moving to the next item.
    pub fn next_input(&self) -> InputRef<'_> {
        match &self.movement {
            Movement::Buttons { next, .. } => InputRef::Button(next),
            Movement::Axis { axis, .. } => InputRef::Axis(axis),
            Movement::Grid { row, .. } => InputRef::Axis(row),
            Movement::Shortcuts(_) => InputRef::None,
        }
    }

    /// The input moving to the previous item.
    pub fn previous_input(&self) -> InputRef<'_> {
        match &self.movement {
            Movement::Buttons { previous, .. } => InputRef::Button(previous),
            Movement::Axis { axis, .. } => InputRef::Axis(axis),
            Movement::Grid { row, .. } => InputRef::Axis(row),
            Movement::Shortcuts(_) => InputRef::None,
        }
    }

    pub fn hints(&self) -> NavHints<'_> {
        NavHints {
            select: &self.select,
            cancel: &self.cancel,
            next: self.next_input(),
            previous: self.previous_input(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    /// Move the cursor `skip + 1` items forward, see [`ItemSource::move_next`].
    ///
    /// Returns `true` if the cursor moved, in which case the move sound plays.
    pub fn move_next(&mut self, skip: usize) -> bool {
        let from = self.items.selected_index();
        let moved = self.items.move_next(skip);
        self.on_move(from, moved)
    }

    /// Move the cursor `skip + 1` items back, see [`ItemSource::move_previous`].
    pub fn move_previous(&mut self, skip: usize) -> bool {
        let from = self.items.selected_index();
        let moved = self.items.move_previous(skip);
        self.on_move(from, moved)
    }

    /// Put the cursor on `index`, returns `false` if out of bounds or
    /// already there.
    pub fn select(&mut self, index: usize) -> bool {
        let from = self.items.selected_index();
        let moved = self.items.select(index);
        self.on_move(from, moved)
    }

    fn on_move(&mut self, from: usize, moved: bool) -> bool {
        if !moved {
            return false;
        }
        let to = self.items.selected_index();
        trace!("navigation cursor moved from item {from} to {to}");
        self.sound.play();
        if self.has_focus {
            if let Some(previous) = self.items.get_mut(from) {
                previous.set_focus(false);
            }
            self.items.selected_mut().set_focus(true);
        }
        true
    }

    pub(crate) fn selected_child(&self) -> Option<NodeId> {
        self.items.selected().child()
    }

    pub(crate) fn set_item_child(&mut self, item: usize, child: Option<NodeId>) -> bool {
        match self.items.get_mut(item) {
            Some(item) => {
                item.set_child(child);
                true
            }
            None => false,
        }
    }

    pub(crate) fn events_mut(&mut self) -> &mut dyn NavEvents {
        &mut *self.events
    }

    /// Whether select was pressed this tick, or a shortcut queued a selection.
    pub(crate) fn take_select(&mut self, input: &dyn InputReader) -> bool {
        let pressed = self.select.was_pressed(input);
        std::mem::take(&mut self.pending_select) || pressed
    }

    pub(crate) fn was_cancelled(&mut self, input: &dyn InputReader) -> bool {
        self.cancel.was_pressed(input)
    }

    pub(crate) fn select_item(&mut self) {
        self.items.selected_mut().select();
    }

    pub(crate) fn cancel_item(&mut self) {
        self.items.selected_mut().cancel();
    }

    /// Apply directional input, recording cursor moves in `events`.
    pub(crate) fn check_input(
        &mut self,
        id: NodeId,
        input: &dyn InputReader,
        events: &mut Vec<NavEvent>,
    ) {
        let from = self.selected_index();
        match &mut self.movement {
            Movement::Buttons { next, previous } => {
                if next.was_pressed(input) {
                    self.move_next(0);
                } else if previous.was_pressed(input) {
                    self.move_previous(0);
                }
            }
            Movement::Axis { axis, threshold } => {
                let (value, threshold) = (axis.value(input), *threshold);
                self.move_with(value, threshold);
            }
            Movement::Grid { row, column, items_per_row, threshold } => {
                let (row, column) = (row.value(input), column.value(input));
                let (per_row, threshold) = (items_per_row.get(), *threshold);
                self.move_in_grid(row, column, per_row, threshold);
            }
            Movement::Shortcuts(shortcuts) => {
                let pressed = shortcuts.iter_mut().find_map(|s| {
                    let pressed = s.button.was_pressed(input);
                    pressed.then_some(s.item)
                });
                if let Some(item) = pressed {
                    self.select(item);
                    self.pending_select = true;
                }
            }
        }
        let to = self.selected_index();
        if from != to {
            events.push(NavEvent::FocusMoved { node: id, from, to });
        }
    }

    fn move_with(&mut self, value: f32, threshold: f32) {
        if value < -threshold {
            self.move_next(0);
        } else if value > threshold {
            self.move_previous(0);
        }
    }

    fn move_in_grid(&mut self, row: f32, column: f32, per_row: usize, threshold: f32) {
        let index = self.selected_index();
        let len = self.items.len();
        let row_end = (index + 1) % per_row == 0;
        let row_start = index % per_row == 0;
        if row < -threshold && !row_end {
            self.move_next(0);
        } else if row > threshold && !row_start {
            self.move_previous(0);
        }

        let index = self.selected_index();
        let last_row = index + per_row >= len;
        let first_row = index < per_row;
        if column < -threshold && !last_row {
            self.move_next(per_row - 1);
        } else if column > threshold && !first_row {
            self.move_previous(per_row - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use bevy::input::keyboard::KeyCode;

    use super::*;
    use crate::input::{AxisCode, InputSnapshot};

    const ROW: AxisCode = AxisCode::Virtual(0);
    const COLUMN: AxisCode = AxisCode::Virtual(1);

    fn items(len: usize) -> Vec<NavItem> {
        (0..len).map(|_| NavItem::new()).collect()
    }
    fn arrows() -> Movement {
        Movement::buttons(KeyCode::ArrowDown, KeyCode::ArrowUp)
    }
    fn node(movement: Movement, len: usize) -> NavigationNode {
        NavigationNode::new(KeyCode::Enter, KeyCode::Escape, movement, items(len)).unwrap()
    }
    fn focused(node: &NavigationNode) -> Vec<usize> {
        let items = node.items().items().iter().enumerate();
        items.filter_map(|(i, item)| item.has_focus().then_some(i)).collect()
    }
    fn tick(node: &mut NavigationNode, input: &mut InputSnapshot) -> Vec<NavEvent> {
        let mut events = Vec::new();
        node.check_input(NodeId::PLACEHOLDER, input, &mut events);
        input.next_frame();
        events
    }

    #[test]
    fn construction_errors() {
        let err = NavigationNode::new(KeyCode::Enter, KeyCode::Escape, arrows(), Vec::new());
        assert!(err.is_err());

        let dpad = [KeyCode::ArrowUp, KeyCode::ArrowDown, KeyCode::ArrowLeft, KeyCode::ArrowRight];
        let grid = Movement::grid(Axis::zero(), Axis::zero(), dpad.map(Button::from), 0);
        assert!(matches!(
            grid,
            Err(NavError::InvalidArgument { name: "items_per_row", .. })
        ));

        let shortcuts = Movement::Shortcuts(vec![Shortcut::new(KeyCode::KeyA, 3)]);
        let err = NavigationNode::new(KeyCode::Enter, KeyCode::Escape, shortcuts, items(3));
        assert!(err.is_err());
    }

    #[test]
    fn focus_invariant() {
        let mut node = node(arrows(), 3);
        assert!(focused(&node).is_empty());

        node.set_focus(true);
        assert_eq!(focused(&node), vec![0]);

        node.move_next(0);
        assert_eq!(focused(&node), vec![1]);

        node.set_focus(false);
        assert!(focused(&node).is_empty());

        // Moving an unfocused node doesn't focus items.
        node.move_next(0);
        assert!(focused(&node).is_empty());
        node.set_focus(true);
        assert_eq!(focused(&node), vec![2]);
    }

    #[test]
    fn unfocused_node_never_calls_focus_callbacks() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let item = || {
            let calls = Arc::clone(&calls);
            NavItem::new().on_focus(move |focus| calls.lock().unwrap().push(focus))
        };
        let mut node =
            NavigationNode::new(KeyCode::Enter, KeyCode::Escape, arrows(), vec![item(), item()])
                .unwrap();
        node.set_items(vec![item(), item()]).unwrap();
        assert!(calls.lock().unwrap().is_empty());
        assert!(focused(&node).is_empty());

        node.set_focus(true);
        node.move_next(0);
        // Replacing the items of a focused node blurs the old ones and
        // focuses the first new one.
        node.set_items(vec![item(), item(), item()]).unwrap();
        assert_eq!(focused(&node), vec![0]);
        assert_eq!(node.selected_index(), 0);
        assert_eq!(*calls.lock().unwrap(), [true, false, true, false, true]);
    }

    #[test]
    fn boundary_moves_are_silent() {
        let plays = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&plays);
        let mut node = node(arrows(), 2).with_sound(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        node.set_focus(true);

        assert!(!node.move_previous(0));
        assert_eq!(plays.load(Ordering::SeqCst), 0);

        assert!(node.move_next(0));
        assert_eq!(plays.load(Ordering::SeqCst), 1);

        assert!(!node.has_next());
        assert!(!node.move_next(0));
        assert_eq!(node.selected_index(), 1);
        assert_eq!(focused(&node), vec![1]);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn button_movement() {
        let mut input = InputSnapshot::new();
        let mut node = node(arrows(), 3);
        node.set_focus(true);

        input.press(KeyCode::ArrowDown);
        let events = tick(&mut node, &mut input);
        let moved = NavEvent::FocusMoved { node: NodeId::PLACEHOLDER, from: 0, to: 1 };
        assert_eq!(events, vec![moved]);

        // Held, not pressed again.
        assert!(tick(&mut node, &mut input).is_empty());

        input.release(KeyCode::ArrowDown).press(KeyCode::ArrowUp);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 0);
    }

    #[test]
    fn axis_movement_is_debounced() {
        let mut input = InputSnapshot::new();
        let mut node = node(Movement::axis(Axis::new(ROW)), 5);
        node.set_focus(true);

        let mut moves = 0;
        for value in [0.0, -0.9, -0.9, 0.0, -0.9] {
            input.set_axis(ROW, value).advance(Duration::from_millis(16));
            moves += tick(&mut node, &mut input).len();
        }
        assert_eq!(moves, 2);
        assert_eq!(node.selected_index(), 2);

        input.set_axis(ROW, 0.0);
        tick(&mut node, &mut input);
        input.set_axis(ROW, 0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 1);
    }

    #[test]
    fn vertical_movement_uses_dpad() {
        let mut input = InputSnapshot::new();
        let stick = Axis::new(COLUMN);
        let movement = Movement::vertical(stick, KeyCode::ArrowUp.into(), KeyCode::ArrowDown.into());
        let mut node = node(movement, 3);
        node.set_focus(true);

        input.press(KeyCode::ArrowDown);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 1);

        // Held past the repeat interval.
        input.advance(AXIS_REPEAT_INTERVAL * 2);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 2);

        input.release(KeyCode::ArrowDown);
        tick(&mut node, &mut input);
        input.press(KeyCode::ArrowUp);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 1);
    }

    fn grid(len: usize, selected: usize) -> NavigationNode {
        let dpad = [Button::null(), Button::null(), Button::null(), Button::null()];
        // Raw axes: the stick's sign is flipped by `grid` for rows.
        let movement = Movement::grid(Axis::new(ROW), Axis::new(COLUMN), dpad, 3).unwrap();
        let mut node = node(movement, len);
        node.select(selected);
        node.set_focus(true);
        node
    }

    #[test]
    fn grid_blocks_at_row_end() {
        let mut input = InputSnapshot::new();
        let mut node = grid(9, 2);

        // Stick right: "next" once inverted.
        input.set_axis(ROW, 0.9);
        assert!(tick(&mut node, &mut input).is_empty());
        assert_eq!(node.selected_index(), 2);

        input.set_axis(ROW, 0.0).set_axis(COLUMN, -0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 5);
        assert_eq!(focused(&node), vec![5]);
    }

    #[test]
    fn grid_blocks_at_row_start_and_edges() {
        let mut input = InputSnapshot::new();
        let mut node = grid(8, 3);

        input.set_axis(ROW, -0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 3);

        input.set_axis(ROW, 0.0).set_axis(COLUMN, 0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 0);

        // Already on the first row.
        input.set_axis(COLUMN, 0.0);
        tick(&mut node, &mut input);
        input.set_axis(COLUMN, 0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 0);

        // Item 5 has no item below it: the last row is incomplete.
        node.select(5);
        input.set_axis(COLUMN, 0.0);
        tick(&mut node, &mut input);
        input.set_axis(COLUMN, -0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 5);

        node.select(4);
        input.set_axis(COLUMN, 0.0);
        tick(&mut node, &mut input);
        input.set_axis(COLUMN, -0.9);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 7);
    }

    #[test]
    fn shortcuts_queue_a_selection() {
        let mut input = InputSnapshot::new();
        let shortcuts = Movement::Shortcuts(vec![
            Shortcut::new(KeyCode::KeyY, 0),
            Shortcut::new(KeyCode::KeyN, 1),
        ]);
        let mut node = node(shortcuts, 2);
        node.set_focus(true);

        input.press(KeyCode::KeyN);
        tick(&mut node, &mut input);
        assert_eq!(node.selected_index(), 1);
        assert!(node.take_select(&input));
        assert!(!node.take_select(&input));
    }

    #[test]
    fn hints_follow_movement() {
        let node = node(arrows(), 2);
        let hints = node.hints();
        assert!(hints.has_next);
        assert!(!hints.has_previous);
        assert!(matches!(hints.next, InputRef::Button(b) if b.codes() == Button::new(KeyCode::ArrowDown).codes()));
        assert!(matches!(hints.previous, InputRef::Button(_)));

        let shortcuts = node_with_shortcuts();
        assert!(matches!(shortcuts.next_input(), InputRef::None));
    }

    fn node_with_shortcuts() -> NavigationNode {
        let shortcuts = Movement::Shortcuts(vec![Shortcut::new(KeyCode::KeyY, 0)]);
        node(shortcuts, 1)
    }
}
