//! Bubbles domain: lifetime, scheduled tasks, and pop resolution.

use std::collections::HashSet;

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bubbles::components::{Bubble, PopCause};
use crate::bubbles::events::{BubblePoppedEvent, PopBubbleEvent, ReleaseEvent};
use crate::bubbles::resources::{
    BubbleGrid, BubbleLedger, BubbleTuning, PendingPops, ScheduledTasks, TaskKind,
};
use crate::bubbles::systems::spawn::BubbleAssets;

/// Rebuild the spatial grid from live bubble positions.
pub(crate) fn rebuild_grid(
    mut grid: ResMut<BubbleGrid>,
    bubble_query: Query<(Entity, &Transform), With<Bubble>>,
) {
    grid.clear();
    for (entity, transform) in &bubble_query {
        grid.insert(entity, transform.translation);
    }
}

/// Count lifetimes down and reclaim strays. Neither path chains.
pub(crate) fn tick_lifetimes(
    time: Res<Time>,
    tuning: Res<BubbleTuning>,
    mut pending: ResMut<PendingPops>,
    mut bubble_query: Query<(Entity, &Transform, &mut Bubble)>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut bubble) in &mut bubble_query {
        bubble.lifetime_remaining -= dt;
        if bubble.lifetime_remaining <= 0.0 {
            pending.queue(entity, PopCause::Expiry);
        } else if transform.translation.length() > tuning.world_bound_radius {
            pending.queue(entity, PopCause::OutOfBounds);
        }
    }
}

/// Fold external pop requests into the pending queue.
pub(crate) fn collect_pop_requests(
    mut pop_requests: MessageReader<PopBubbleEvent>,
    mut pending: ResMut<PendingPops>,
) {
    for request in pop_requests.read() {
        pending.queue(request.bubble, PopCause::DirectHit);
    }
}

/// Advance the deferred-task registry and act on whatever is due.
///
/// Targets that died since scheduling are skipped silently; cancellation at
/// despawn time already removed most of them.
pub(crate) fn tick_scheduled_tasks(
    time: Res<Time>,
    tuning: Res<BubbleTuning>,
    assets: Res<BubbleAssets>,
    mut tasks: ResMut<ScheduledTasks>,
    mut pending: ResMut<PendingPops>,
    mut bubble_query: Query<(
        &mut Bubble,
        &mut Mass,
        &mut GravityScale,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
    mut release_events: MessageWriter<ReleaseEvent>,
) {
    for task in tasks.tick(time.delta_secs()) {
        match task.kind {
            TaskKind::Pop => {
                if bubble_query.get(task.target).is_ok() {
                    pending.queue(task.target, PopCause::Chain);
                } else {
                    debug!("[BUBBLE] Skipping scheduled pop of dead {:?}", task.target);
                }
            }
            TaskKind::Release => {
                let Ok((mut bubble, mut mass, mut gravity_scale, mut material)) =
                    bubble_query.get_mut(task.target)
                else {
                    debug!(
                        "[BUBBLE] Skipping scheduled release of dead {:?}",
                        task.target
                    );
                    continue;
                };

                let Some(released) = bubble.carrying.take() else {
                    continue;
                };

                mass.0 = tuning.mass;
                gravity_scale.0 = tuning.buoyancy_scale;
                material.0 = assets.material.clone();

                info!("[BUBBLE] {:?} released {:?}", task.target, released);
                release_events.write(ReleaseEvent {
                    bubble: task.target,
                    released,
                });
            }
        }
    }
}

/// Schedule the staggered chain wave over an already-discovered neighbor set.
pub(crate) fn schedule_chain(tasks: &mut ScheduledTasks, neighbors: &[Entity], stagger: f32) {
    for (index, neighbor) in neighbors.iter().enumerate() {
        tasks.schedule(*neighbor, index as f32 * stagger, TaskKind::Pop);
    }
}

/// Resolve every pop queued this tick: emit the event, run the chain scan
/// where the cause calls for one, despawn, and cancel leftover tasks.
pub(crate) fn resolve_pops(
    mut commands: Commands,
    tuning: Res<BubbleTuning>,
    grid: Res<BubbleGrid>,
    mut pending: ResMut<PendingPops>,
    mut ledger: ResMut<BubbleLedger>,
    mut tasks: ResMut<ScheduledTasks>,
    bubble_query: Query<(&Transform, &Bubble)>,
    mut popped_events: MessageWriter<BubblePoppedEvent>,
    mut release_events: MessageWriter<ReleaseEvent>,
) {
    let mut popped_this_tick: HashSet<Entity> = HashSet::new();

    for pop in pending.drain() {
        if !popped_this_tick.insert(pop.bubble) {
            continue;
        }
        let Ok((transform, bubble)) = bubble_query.get(pop.bubble) else {
            // Already gone; nothing to do.
            continue;
        };
        let position = transform.translation;

        // A carried entity is let go at the moment of destruction.
        if let Some(released) = bubble.carrying {
            release_events.write(ReleaseEvent {
                bubble: pop.bubble,
                released,
            });
        }

        info!("[BUBBLE] Popped {:?} ({:?})", pop.bubble, pop.cause);
        popped_events.write(BubblePoppedEvent {
            bubble: pop.bubble,
            position,
            cause: pop.cause,
        });

        if pop.cause.triggers_chain() {
            // One wave over the bubbles alive right now, in discovery order.
            let neighbors: Vec<Entity> = grid
                .within_radius(position, tuning.chain_radius, pop.bubble)
                .into_iter()
                .filter(|n| !popped_this_tick.contains(n) && ledger.contains(*n))
                .collect();
            schedule_chain(&mut tasks, &neighbors, tuning.chain_stagger);
        }

        ledger.remove(pop.bubble);
        tasks.cancel_for(pop.bubble);
        commands.entity(pop.bubble).despawn();
    }
}
