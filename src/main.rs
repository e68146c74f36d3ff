mod arena;
mod bubbles;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod gravity;
mod locomotion;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Updraft".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        gravity::GravityPlugin,
        locomotion::LocomotionPlugin,
        bubbles::BubblesPlugin,
        arena::ArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
