//! Bubbles domain: the buoyant projectile pool - spawn, one-way solidity,
//! capture, chain pops, lifetime and eviction.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Bubble, Capturable, PopCause};
pub use events::{
    BubblePoppedEvent, BubbleSpawnedEvent, CaptureEvent, PopBubbleEvent, ReleaseEvent,
    TrampolineEvent,
};
pub use resources::{
    BubbleGrid, BubbleLedger, BubbleTuning, PendingPops, ScheduledTask, ScheduledTasks, TaskKind,
};
pub use systems::BubbleAssets;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::bubbles::systems::{
    apply_trampoline, capture_on_contact, collect_pop_requests, fire_bubbles, rebuild_grid,
    resolve_pops, setup_bubble_assets, tick_lifetimes, tick_scheduled_tasks, update_solidity,
};

pub struct BubblesPlugin;

impl Plugin for BubblesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BubbleTuning>()
            .init_resource::<BubbleLedger>()
            .init_resource::<ScheduledTasks>()
            .init_resource::<BubbleGrid>()
            .init_resource::<PendingPops>()
            .add_message::<BubbleSpawnedEvent>()
            .add_message::<PopBubbleEvent>()
            .add_message::<BubblePoppedEvent>()
            .add_message::<TrampolineEvent>()
            .add_message::<CaptureEvent>()
            .add_message::<ReleaseEvent>()
            .add_systems(Startup, setup_bubble_assets)
            .add_systems(
                FixedUpdate,
                (
                    rebuild_grid,
                    fire_bubbles,
                    update_solidity,
                    apply_trampoline,
                    capture_on_contact,
                    tick_lifetimes,
                    collect_pop_requests,
                    tick_scheduled_tasks,
                    resolve_pops,
                )
                    .chain()
                    .in_set(SimulationSet::Bubbles),
            );
    }
}
