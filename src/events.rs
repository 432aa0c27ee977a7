//! Notifications emitted by navigation nodes.
use bevy::ecs::event::Event;

use crate::tree::NodeId;

/// Observer of the focus hand-offs of a single [`NavigationNode`].
///
/// All methods default to doing nothing. A typical menu hides itself while
/// one of its child menus has focus and shows itself again when the child
/// gives focus back.
///
/// [`NavigationNode`]: crate::NavigationNode
pub trait NavEvents: Send + Sync {
    /// The child node of the selected item just received focus.
    fn on_child_gained_focus(&mut self) {}

    /// The focused child node gave focus back to this node.
    fn on_child_gave_up_focus(&mut self) {}

    /// This node lost focus, through cancel or auto-resolve.
    fn on_gave_up_focus(&mut self) {}
}

/// [`NavEvents`] that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNavEvents;
impl NavEvents for NullNavEvents {}

/// Feedback played when the cursor of a node moves.
pub trait Sound: Send + Sync {
    fn play(&mut self);
}
impl<F: FnMut() + Send + Sync> Sound for F {
    fn play(&mut self) {
        self()
    }
}

/// A [`Sound`] that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSound;
impl Sound for NoSound {
    fn play(&mut self) {}
}

/// What happened during a [`NavTree`] tick.
///
/// Collected by the tree, see [`NavTree::drain_events`]. The
/// [`NavigationPlugin`] sends them as bevy events after each tick.
///
/// [`NavTree`]: crate::NavTree
/// [`NavTree::drain_events`]: crate::NavTree::drain_events
/// [`NavigationPlugin`]: crate::NavigationPlugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
pub enum NavEvent {
    /// The cursor of `node` moved from item `from` to item `to`.
    FocusMoved { node: NodeId, from: usize, to: usize },

    /// The item at `index` of `node` was selected.
    Selected { node: NodeId, index: usize },

    /// Cancel was pressed while the item at `index` of `node` was selected.
    Cancelled { node: NodeId, index: usize },

    /// `parent` handed focus to `child`.
    ChildGainedFocus { parent: NodeId, child: NodeId },

    /// `child` gave focus back to `parent`.
    ChildGaveUpFocus { parent: NodeId, child: NodeId },

    /// `node` lost focus.
    GaveUpFocus { node: NodeId },
}
impl NavEvent {
    /// The node that emitted this event.
    pub fn node(&self) -> NodeId {
        use NavEvent::*;
        match *self {
            FocusMoved { node, .. }
            | Selected { node, .. }
            | Cancelled { node, .. }
            | GaveUpFocus { node } => node,
            ChildGainedFocus { parent, .. } | ChildGaveUpFocus { parent, .. } => parent,
        }
    }
}
