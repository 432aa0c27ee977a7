/*!
[`NavTree`]: NavTree
[`NavigationNode`]: NavigationNode
[`NavItem`]: NavItem
[`Movement`]: Movement
[`NavEvent`]: NavEvent
[`NavEvents`]: NavEvents
[`InputMapping`]: systems::InputMapping
[`InputSnapshot`]: input::InputSnapshot
[`NavigationPlugin`]: NavigationPlugin
*/
#![doc = include_str!("../Readme.md")]
mod error;
pub mod events;
pub mod input;
mod items;
mod node;
pub mod systems;
mod tree;

use bevy::prelude::*;

pub use error::NavError;
pub use events::{NavEvent, NavEvents, NoSound, NullNavEvents, Sound};
pub use items::{ItemSource, NavItem};
pub use node::{InputRef, Movement, NavHints, NavState, NavigationNode, NodeSettings, Shortcut};
pub use tree::{NavTree, NodeId};

/// The label of the system in which the [`NavTree`] is ticked and the
/// [`NavEvent`] events are sent.
///
/// Systems reacting to focus changes (highlighting widgets, playing sounds…)
/// should run _after_ the `NavigationSystem`, while systems building or
/// editing menus should run _before_ it.
///
/// # Example
///
/// ```rust, no_run
/// use bevy::prelude::*;
/// use bevy_focus_navigation::{NavEvent, NavigationPlugin, NavigationSystem};
///
/// fn highlight(mut events: EventReader<NavEvent>) {
///     for event in events.read() {
///         info!("{event:?}");
///     }
/// }
/// fn main() {
///     App::new()
///         .add_plugins((MinimalPlugins, NavigationPlugin))
///         .add_systems(Update, highlight.after(NavigationSystem))
///         .run();
/// }
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, SystemSet)]
pub struct NavigationSystem;

/// The navigation plugin.
///
/// Add it to your app with `.add_plugins(NavigationPlugin)`, then insert
/// your menus in the [`NavTree`] resource and give focus to the root one.
/// Each frame, all root nodes of the tree are ticked with the current
/// keyboard and gamepad input, and the resulting [`NavEvent`]s are sent.
///
/// Default bindings are stored in the [`systems::InputMapping`] resource.
pub struct NavigationPlugin;
impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<NavEvent>()
            .init_resource::<NavTree>()
            .init_resource::<systems::InputMapping>()
            .add_systems(Update, systems::tick_navigation.in_set(NavigationSystem));
    }
}
