//! A main menu with a sub-menu, driven by a scripted sequence of key presses.
//!
//! Run with `cargo run --example nested_menu`, it logs every navigation event
//! and exits once the script is over.
use bevy::{app::AppExit, input::InputPlugin, log::LogPlugin, prelude::*};
use bevy_focus_navigation::{
    systems::InputMapping, NavEvent, NavEvents, NavItem, NavTree, NavigationNode,
    NavigationPlugin, NavigationSystem,
};

fn main() {
    App::new()
        .add_plugins((MinimalPlugins, InputPlugin, LogPlugin::default()))
        .add_plugins(NavigationPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, play_script.before(NavigationSystem))
        .add_systems(Update, print_events.after(NavigationSystem))
        .run();
}

/// Logs when the main menu hides behind its sub-menu.
struct MainMenu;
impl NavEvents for MainMenu {
    fn on_child_gained_focus(&mut self) {
        info!("main menu hidden behind the options");
    }
    fn on_child_gave_up_focus(&mut self) {
        info!("main menu visible again");
    }
}

fn setup(mapping: Res<InputMapping>, mut tree: ResMut<NavTree>) {
    let menu = |items| {
        NavigationNode::new(mapping.select(), mapping.cancel(), mapping.vertical(), items)
    };
    let options = vec![
        NavItem::new().on_focus(|focus| info!("  [volume] focused: {focus}")),
        NavItem::new().on_focus(|focus| info!("  [controls] focused: {focus}")),
    ];
    let Ok(options) = menu(options) else {
        return;
    };
    let options = tree.insert(options);

    let main = vec![
        NavItem::new().on_select(|| info!("[start] selected")),
        NavItem::new().with_child(options),
        NavItem::new().on_select(|| info!("[quit] selected")),
    ];
    let Ok(main) = menu(main) else {
        return;
    };
    let main = tree.insert(main.with_events(MainMenu));
    if let Err(error) = tree.set_focus(main, true) {
        error!("{error}");
    }
}

const SCRIPT: &[Option<KeyCode>] = &[
    None,
    Some(KeyCode::ArrowDown),
    None,
    Some(KeyCode::Enter),
    None,
    Some(KeyCode::KeyS),
    None,
    Some(KeyCode::Escape),
    None,
    Some(KeyCode::ArrowDown),
    None,
    Some(KeyCode::Enter),
];

fn play_script(
    mut frame: Local<usize>,
    mut keys: ResMut<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    keys.release_all();
    match SCRIPT.get(*frame) {
        Some(Some(key)) => {
            info!("pressing {key:?}");
            keys.press(*key);
        }
        Some(None) => {}
        None => {
            exit.send(AppExit);
        }
    }
    *frame += 1;
}

fn print_events(mut events: EventReader<NavEvent>) {
    for event in events.read() {
        info!("{event:?}");
    }
}
