//! Focusable menu entries and the cursor over them.
use std::fmt;

use non_empty_vec::NonEmpty;

use crate::{error::NavError, tree::NodeId};

type Callback = Box<dyn FnMut() + Send + Sync>;
type FocusCallback = Box<dyn FnMut(bool) + Send + Sync>;

/// A single selectable entry of a menu.
///
/// The focus state of a `NavItem` is managed by the
/// [`NavigationNode`](crate::NavigationNode) holding it.
/// Use [`NavItem::on_focus`] to react to focus changes,
/// for example to highlight the widget it represents.
///
/// A `NavItem` may lead to a child node, which receives focus when the item
/// is selected.
#[derive(Default)]
pub struct NavItem {
    has_focus: bool,
    child: Option<NodeId>,
    parts: Vec<NavItem>,
    on_select: Option<Callback>,
    on_cancel: Option<Callback>,
    on_focus: Option<FocusCallback>,
}
impl fmt::Debug for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavItem")
            .field("has_focus", &self.has_focus)
            .field("child", &self.child)
            .field("parts", &self.parts)
            .finish_non_exhaustive()
    }
}
impl NavItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single menu entry made of several `parts`, for example a label and
    /// its icon.
    ///
    /// Focus, select and cancel are forwarded to every part, in order.
    /// The item leads to the child of the first part that has one.
    pub fn composite(parts: Vec<NavItem>) -> Self {
        NavItem {
            child: parts.iter().find_map(NavItem::child),
            parts,
            ..Self::default()
        }
    }

    /// Give focus to `child` when this item is selected.
    pub fn with_child(mut self, child: NodeId) -> Self {
        self.child = Some(child);
        self
    }

    pub fn on_select(mut self, f: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called with the new focus state each time it is set.
    pub fn on_focus(mut self, f: impl FnMut(bool) + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    pub(crate) fn set_child(&mut self, child: Option<NodeId>) {
        self.child = child;
    }

    pub(crate) fn set_focus(&mut self, focus: bool) {
        self.has_focus = focus;
        self.parts.iter_mut().for_each(|part| part.set_focus(focus));
        if let Some(on_focus) = &mut self.on_focus {
            on_focus(focus);
        }
    }

    pub(crate) fn select(&mut self) {
        self.parts.iter_mut().for_each(NavItem::select);
        if let Some(on_select) = &mut self.on_select {
            on_select();
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.parts.iter_mut().for_each(NavItem::cancel);
        if let Some(on_cancel) = &mut self.on_cancel {
            on_cancel();
        }
    }
}

/// An ordered, non-empty list of [`NavItem`]s and a cursor over them.
///
/// The cursor never wraps around: moving past either end is a no-op.
#[derive(Debug)]
pub struct ItemSource {
    items: NonEmpty<NavItem>,
    selected: usize,
}
impl ItemSource {
    /// Create a source with the cursor and focus on the first item.
    ///
    /// Fails if `items` is empty.
    pub fn new(items: Vec<NavItem>) -> Result<Self, NavError> {
        let mut source = Self::blurred(items)?;
        source.refresh();
        Ok(source)
    }

    /// Create a source with the cursor on the first item and no item
    /// focused, without calling any focus callback.
    pub(crate) fn blurred(items: Vec<NavItem>) -> Result<Self, NavError> {
        let items = NonEmpty::try_from(items)
            .map_err(|_| NavError::invalid("items", "a menu needs at least one item"))?;
        Ok(ItemSource { items, selected: 0 })
    }

    /// Replace all items, moving the cursor back to the first one.
    ///
    /// Fails if `items` is empty, leaving the current items untouched.
    pub fn set_items(&mut self, items: Vec<NavItem>) -> Result<(), NavError> {
        *self = ItemSource::new(items)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len().get()
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut NavItem> {
        self.items.get_mut(index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &NavItem {
        &self.items[self.selected]
    }

    pub(crate) fn selected_mut(&mut self) -> &mut NavItem {
        &mut self.items[self.selected]
    }

    pub fn has_next(&self) -> bool {
        self.selected < self.len() - 1
    }

    pub fn has_previous(&self) -> bool {
        self.selected > 0
    }

    /// Advance the cursor by `skip + 1`, stopping at the last item.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_next(&mut self, skip: usize) -> bool {
        let last = self.len() - 1;
        let target = self.selected.saturating_add(skip).saturating_add(1).min(last);
        self.move_to(target)
    }

    /// Move the cursor back by `skip + 1`, stopping at the first item.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_previous(&mut self, skip: usize) -> bool {
        let target = self.selected.saturating_sub(skip.saturating_add(1));
        self.move_to(target)
    }

    /// Put the cursor on `index`, returns `false` if out of bounds
    /// or already there.
    ///
    /// This doesn't update item focus, see [`Self::refresh`].
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.move_to(index)
    }

    fn move_to(&mut self, index: usize) -> bool {
        let moved = index != self.selected;
        self.selected = index;
        moved
    }

    /// Focus the item under the cursor, unfocus all others.
    pub fn refresh(&mut self) {
        let selected = self.selected;
        for (i, item) in self.items.iter_mut().enumerate() {
            let focus = i == selected;
            if item.has_focus != focus {
                item.set_focus(focus);
            }
        }
    }

    /// Unfocus all items.
    pub(crate) fn blur(&mut self) {
        for item in self.items.iter_mut().filter(|item| item.has_focus) {
            item.set_focus(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    fn source(len: usize) -> ItemSource {
        ItemSource::new((0..len).map(|_| NavItem::new()).collect()).unwrap()
    }
    fn focused(source: &ItemSource) -> Vec<usize> {
        let focused = source.items().iter().enumerate();
        focused.filter_map(|(i, item)| item.has_focus().then_some(i)).collect()
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = ItemSource::new(Vec::new()).unwrap_err();
        assert!(matches!(err, NavError::InvalidArgument { name: "items", .. }));

        let mut source = source(2);
        assert!(source.set_items(Vec::new()).is_err());
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn construction_focuses_first_item() {
        let source = source(3);
        assert_eq!(source.selected_index(), 0);
        assert_eq!(focused(&source), vec![0]);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut source = source(4);
        assert!(!source.has_previous());
        assert!(!source.move_previous(0));
        assert!(source.move_next(1));
        assert_eq!(source.selected_index(), 2);
        assert!(source.move_next(10));
        assert_eq!(source.selected_index(), 3);
        assert!(!source.has_next());
        assert!(!source.move_next(0));
        assert_eq!(source.selected_index(), 3);
        assert!(source.move_previous(usize::MAX));
        assert_eq!(source.selected_index(), 0);
    }

    #[test]
    fn select_and_refresh() {
        let mut source = source(3);
        assert!(!source.select(3));
        assert!(source.select(2));
        assert_eq!(focused(&source), vec![0]);
        source.refresh();
        assert_eq!(focused(&source), vec![2]);
        source.blur();
        assert!(focused(&source).is_empty());
    }

    #[test]
    fn focus_callbacks_only_fire_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let item = NavItem::new().on_focus(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut source = ItemSource::new(vec![NavItem::new(), item]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        source.select(1);
        source.refresh();
        source.refresh();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn blurred_source_stays_quiet() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let item = NavItem::new().on_focus(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let source = ItemSource::blurred(vec![item, NavItem::new()]).unwrap();
        assert!(focused(&source).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(ItemSource::blurred(Vec::new()).is_err());
    }

    #[test]
    fn composite_item_forwards_to_parts() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let part = |name: &'static str| {
            let (focus, select, cancel) = (calls.clone(), calls.clone(), calls.clone());
            NavItem::new()
                .on_focus(move |f| focus.lock().unwrap().push(format!("{name} focus {f}")))
                .on_select(move || select.lock().unwrap().push(format!("{name} select")))
                .on_cancel(move || cancel.lock().unwrap().push(format!("{name} cancel")))
        };
        let child = NodeId::PLACEHOLDER;
        let mut item = NavItem::composite(vec![part("label"), part("icon").with_child(child)]);
        assert_eq!(item.child(), Some(child));
        assert_eq!(NavItem::composite(vec![NavItem::new()]).child(), None);

        item.set_focus(true);
        assert!(item.has_focus());
        assert!(item.parts.iter().all(NavItem::has_focus));
        item.select();
        item.cancel();
        item.set_focus(false);
        assert!(!item.parts.iter().any(NavItem::has_focus));
        assert_eq!(
            *calls.lock().unwrap(),
            [
                "label focus true",
                "icon focus true",
                "label select",
                "icon select",
                "label cancel",
                "icon cancel",
                "label focus false",
                "icon focus false",
            ]
        );
    }
}
