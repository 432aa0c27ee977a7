//! Construct and navigate the navigation tree.
//!
//! The tree structure is implicit: a [`NavItem`](crate::NavItem) may point
//! to a child node, and the child of the selected item is the one that
//! receives focus when the item is selected. The [`NavTree`] only owns the
//! nodes and hands them out by [`NodeId`].
//!
//! A tick walks down the chain of focused nodes: each focused node whose
//! selected item has a focused child delegates the tick to that child.
use bevy::{
    ecs::system::Resource,
    log::{debug, warn},
};

use crate::{
    error::NavError,
    events::NavEvent,
    input::InputReader,
    node::{NavState, NavigationNode},
};

/// Monotonically increasing counter, distinguishing reused slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Generation(u32);

/// Handle to a [`NavigationNode`] in a [`NavTree`].
///
/// Ids are weak: once a node is [removed](NavTree::remove), its id is never
/// valid again, even if its slot gets reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: Generation,
}
impl NodeId {
    /// An id that no tree ever returns.
    pub const PLACEHOLDER: NodeId = NodeId {
        index: usize::MAX,
        generation: Generation(u32::MAX),
    };
}

#[derive(Debug)]
struct Slot {
    generation: Generation,
    node: Option<NavigationNode>,
}

/// Owner of all the [`NavigationNode`]s of a UI.
///
/// Use [`NavTree::tick`] once per frame, or [`NavTree::check_navigation`]
/// to drive a single node.
#[derive(Debug, Default, Resource)]
pub struct NavTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    events: Vec<NavEvent>,
}

impl NavTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` to the tree.
    pub fn insert(&mut self, node: NavigationNode) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId { index, generation: slot.generation }
            }
            None => {
                let generation = Generation(0);
                self.slots.push(Slot { generation, node: Some(node) });
                NodeId { index: self.slots.len() - 1, generation }
            }
        }
    }

    /// Remove the node, returning it.
    ///
    /// Items still pointing to `id` behave as if they had no child, and
    /// are unlinked from it the next time a tick reaches them.
    pub fn remove(&mut self, id: NodeId) -> Result<NavigationNode, NavError> {
        self.get(id).ok_or(NavError::UnknownNode(id))?;
        let slot = &mut self.slots[id.index];
        let node = slot.node.take().ok_or(NavError::UnknownNode(id))?;
        slot.generation = Generation(slot.generation.0.wrapping_add(1));
        self.free.push(id.index);
        Ok(node)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&NavigationNode> {
        let slot = self.slots.get(id.index)?;
        (slot.generation == id.generation)
            .then_some(slot.node.as_ref())
            .flatten()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NavigationNode> {
        let slot = self.slots.get_mut(id.index)?;
        (slot.generation == id.generation)
            .then_some(slot.node.as_mut())
            .flatten()
    }

    /// All nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NavigationNode)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let id = NodeId { index, generation: slot.generation };
            slot.node.as_ref().map(|node| (id, node))
        })
    }

    /// Nodes that no item of this tree points to.
    pub fn roots(&self) -> Vec<NodeId> {
        let children: Vec<NodeId> = self
            .iter()
            .flat_map(|(_, node)| node.items().items().iter().filter_map(|i| i.child()))
            .collect();
        self.iter()
            .map(|(id, _)| id)
            .filter(|id| !children.contains(id))
            .collect()
    }

    /// Give or remove focus from a node, see [`NavigationNode::set_focus`].
    pub fn set_focus(&mut self, id: NodeId, focus: bool) -> Result<(), NavError> {
        let node = self.get_mut(id).ok_or(NavError::UnknownNode(id))?;
        node.set_focus(focus);
        debug!("navigation node {id:?} focus set to {focus}");
        Ok(())
    }

    /// Make item `item` of `parent` lead to `child`, or to nothing with `None`.
    ///
    /// Fails if either node isn't in this tree, if `item` is out of bounds,
    /// or if `parent` is reachable from `child`.
    pub fn set_child(
        &mut self,
        parent: NodeId,
        item: usize,
        child: Option<NodeId>,
    ) -> Result<(), NavError> {
        if let Some(child) = child {
            self.get(child).ok_or(NavError::UnknownNode(child))?;
            if self.reaches(child, parent) {
                return Err(NavError::Cycle { parent, child });
            }
        }
        let node = self.get_mut(parent).ok_or(NavError::UnknownNode(parent))?;
        if !node.set_item_child(item, child) {
            return Err(NavError::invalid("item", "no item at this index"));
        }
        Ok(())
    }

    /// Whether `to` is `from` or one of its descendants.
    fn reaches(&self, from: NodeId, to: NodeId) -> bool {
        let mut stack = vec![from];
        let mut visited = Vec::new();
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            if visited.contains(&id) {
                continue;
            }
            visited.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.items().items().iter().filter_map(|i| i.child()));
            }
        }
        false
    }

    /// The live child of the selected item of `id`, if any.
    fn selected_child(&self, id: NodeId) -> Option<NodeId> {
        let child = self.get(id)?.selected_child()?;
        self.contains(child).then_some(child)
    }

    /// Same as `selected_child`, but also unlinks the selected item from its
    /// child if the child was removed.
    fn prune_selected_child(&mut self, id: NodeId) -> Option<NodeId> {
        let child = self.get(id)?.selected_child()?;
        if self.contains(child) {
            return Some(child);
        }
        warn!("Navigation node {id:?} points to removed child node {child:?}, unlinking it");
        if let Some(node) = self.get_mut(id) {
            let index = node.selected_index();
            node.set_item_child(index, None);
        }
        None
    }

    /// The focus state of `id`, `None` if it isn't in the tree.
    pub fn state(&self, id: NodeId) -> Option<NavState> {
        let node = self.get(id)?;
        let child_focused = || {
            let child = self.selected_child(id)?;
            self.get(child).map(NavigationNode::has_focus)
        };
        Some(match () {
            () if !node.has_focus() => NavState::Unfocused,
            () if child_focused().unwrap_or(false) => NavState::FocusedChild,
            () => NavState::FocusedSelf,
        })
    }

    /// The deepest focused node reachable from `root`, following focused
    /// children of selected items.
    pub fn focused_leaf(&self, root: NodeId) -> Option<NodeId> {
        let mut current = root;
        if !self.get(current)?.has_focus() {
            return None;
        }
        let mut path = vec![current];
        while let Some(child) = self.selected_child(current) {
            let focused = self.get(child).map_or(false, NavigationNode::has_focus);
            if !focused || path.contains(&child) {
                break;
            }
            path.push(child);
            current = child;
        }
        Some(current)
    }

    /// Tick every [root](Self::roots) once.
    pub fn tick(&mut self, input: &dyn InputReader) {
        for root in self.roots() {
            self.check_navigation(root, input);
        }
    }

    /// Handle one frame of input for `id`, delegating to its focused child
    /// if it has one.
    ///
    /// Must be called at most once per node and frame, otherwise a single
    /// button press may be handled twice.
    pub fn check_navigation(&mut self, id: NodeId, input: &dyn InputReader) {
        let mut path = Vec::with_capacity(4);
        self.check_navigation_at(id, input, &mut path);
    }

    fn check_navigation_at(&mut self, id: NodeId, input: &dyn InputReader, path: &mut Vec<NodeId>) {
        if path.contains(&id) {
            warn!(
                "Navigation graph cycle detected at node {id:?}, check usages of \
                `NavItem::with_child`. Stopping navigation for this frame."
            );
            return;
        }
        let Some(node) = self.get(id) else {
            warn!("Tried to check navigation of node {id:?}, which is not in the tree");
            return;
        };
        if !node.has_focus() {
            return;
        }
        let settings = node.settings();
        path.push(id);

        let child = self.prune_selected_child(id);
        if let Some(child) = child {
            let child_focused = self.get(child).map_or(false, NavigationNode::has_focus);
            if settings.auto_select && !child_focused {
                self.give_focus_to_child(id, child);
            }
            let child_focused = self.get(child).map_or(false, NavigationNode::has_focus);
            if child_focused {
                self.check_navigation_at(child, input, path);
                if !self.get(child).map_or(false, NavigationNode::has_focus) {
                    self.child_gave_up_focus(id, child);
                }
                if !settings.child_captures_input {
                    self.check_input(id, input);
                }
                return;
            }
        }

        let Some(node) = self.get_mut(id) else { return };
        if node.take_select(input) {
            let index = node.selected_index();
            node.select_item();
            self.events.push(NavEvent::Selected { node: id, index });

            if settings.auto_resolve_focus {
                self.give_up_focus(id);
                return;
            }
            if let Some(child) = child {
                self.give_focus_to_child(id, child);
                return;
            }
        }

        let Some(node) = self.get_mut(id) else { return };
        if node.was_cancelled(input) {
            let index = node.selected_index();
            node.cancel_item();
            self.events.push(NavEvent::Cancelled { node: id, index });
            self.give_up_focus(id);
            return;
        }

        self.check_input(id, input);
    }

    fn check_input(&mut self, id: NodeId, input: &dyn InputReader) {
        let mut events = std::mem::take(&mut self.events);
        if let Some(node) = self.get_mut(id) {
            node.check_input(id, input, &mut events);
        }
        self.events = events;
    }

    fn give_focus_to_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.get_mut(child) {
            child_node.set_focus(true);
        }
        if let Some(node) = self.get_mut(parent) {
            node.events_mut().on_child_gained_focus();
        }
        debug!("navigation node {parent:?} handed focus to {child:?}");
        self.events.push(NavEvent::ChildGainedFocus { parent, child });
    }

    fn child_gave_up_focus(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.get_mut(parent) {
            node.events_mut().on_child_gave_up_focus();
        }
        debug!("navigation node {child:?} gave focus back to {parent:?}");
        self.events.push(NavEvent::ChildGaveUpFocus { parent, child });
    }

    fn give_up_focus(&mut self, id: NodeId) {
        if let Some(node) = self.get_mut(id) {
            node.set_focus(false);
            node.events_mut().on_gave_up_focus();
        }
        debug!("navigation node {id:?} gave up focus");
        self.events.push(NavEvent::GaveUpFocus { node: id });
    }

    /// Events accumulated since the last call, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, NavEvent> {
        self.events.drain(..)
    }
}
