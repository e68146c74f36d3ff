//! Bubbles domain: unit tests for solidity, pool bookkeeping, scheduling,
//! and the spatial grid.

use bevy::prelude::*;

use super::systems::pops::schedule_chain;
use super::systems::solidity::is_solid;
use super::{BubbleGrid, BubbleLedger, PopCause, ScheduledTasks, TaskKind};

fn entities(count: usize) -> (World, Vec<Entity>) {
    let mut world = World::new();
    let list = (0..count).map(|_| world.spawn_empty().id()).collect();
    (world, list)
}

// -----------------------------------------------------------------------------
// One-way rule
// -----------------------------------------------------------------------------

#[test]
fn test_solid_when_above_and_descending() {
    // Character at y=5, bubble at y=3, descending at 3 m/s.
    let solid = is_solid(
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, -3.0, 0.0),
        Vec3::Y,
        0.2,
    );
    assert!(solid);
}

#[test]
fn test_ghost_when_above_and_ascending() {
    // Same positions, character rising: passes through.
    let solid = is_solid(
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::Y,
        0.2,
    );
    assert!(!solid);
}

#[test]
fn test_ghost_when_below() {
    let solid = is_solid(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, -3.0, 0.0),
        Vec3::Y,
        0.2,
    );
    assert!(!solid);
}

#[test]
fn test_solidity_follows_gravity_direction() {
    // Gravity along +X: "up" is -X, so smaller x means higher.
    let up = Vec3::NEG_X;
    let solid = is_solid(
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 0.0),
        up,
        0.2,
    );
    assert!(solid);
}

#[test]
fn test_slow_descent_is_not_descending() {
    let solid = is_solid(
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, -0.1, 0.0),
        Vec3::Y,
        0.2,
    );
    assert!(!solid);
}

// -----------------------------------------------------------------------------
// Ledger / eviction
// -----------------------------------------------------------------------------

#[test]
fn test_ledger_evicts_oldest_at_capacity() {
    let (_world, list) = entities(31);
    let mut ledger = BubbleLedger::default();
    let capacity = 30;

    for bubble in list.iter().take(capacity) {
        ledger.push(*bubble);
    }
    assert_eq!(ledger.len(), capacity);

    // The 31st spawn evicts the very first bubble, by spawn order.
    let evicted = ledger.take_oldest().unwrap();
    assert_eq!(evicted, list[0]);
    ledger.push(list[30]);

    assert_eq!(ledger.len(), capacity);
    assert!(!ledger.contains(list[0]));
    assert!(ledger.contains(list[30]));
}

#[test]
fn test_ledger_remove_keeps_order() {
    let (_world, list) = entities(3);
    let mut ledger = BubbleLedger::default();
    for bubble in &list {
        ledger.push(*bubble);
    }

    ledger.remove(list[1]);

    assert_eq!(ledger.take_oldest(), Some(list[0]));
    assert_eq!(ledger.take_oldest(), Some(list[2]));
    assert!(ledger.is_empty());
}

// -----------------------------------------------------------------------------
// Scheduled tasks
// -----------------------------------------------------------------------------

#[test]
fn test_chain_delays_are_staggered_in_discovery_order() {
    let (_world, list) = entities(3);
    let mut tasks = ScheduledTasks::default();

    schedule_chain(&mut tasks, &list, 0.1);
    assert_eq!(tasks.pending(), 3);

    // First fires immediately (delay 0), the others 100 ms apart.
    let due = tasks.tick(0.0);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].target, list[0]);

    let due = tasks.tick(0.1);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].target, list[1]);

    let due = tasks.tick(0.1);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].target, list[2]);

    assert_eq!(tasks.pending(), 0);
}

#[test]
fn test_cancel_for_removes_all_tasks_for_target() {
    let (_world, list) = entities(2);
    let mut tasks = ScheduledTasks::default();

    tasks.schedule(list[0], 0.5, TaskKind::Pop);
    tasks.schedule(list[0], 1.0, TaskKind::Release);
    tasks.schedule(list[1], 0.5, TaskKind::Pop);

    tasks.cancel_for(list[0]);

    assert_eq!(tasks.pending(), 1);
    assert_eq!(tasks.pending_for(list[0]), 0);
    assert_eq!(tasks.pending_for(list[1]), 1);
}

#[test]
fn test_tick_drains_everything_due_at_once() {
    let (_world, list) = entities(2);
    let mut tasks = ScheduledTasks::default();

    tasks.schedule(list[0], 0.05, TaskKind::Pop);
    tasks.schedule(list[1], 0.08, TaskKind::Pop);

    let due = tasks.tick(0.1);
    assert_eq!(due.len(), 2);
    assert_eq!(tasks.pending(), 0);
}

// -----------------------------------------------------------------------------
// Spatial grid
// -----------------------------------------------------------------------------

#[test]
fn test_grid_finds_neighbors_within_radius() {
    let (_world, list) = entities(4);
    let mut grid = BubbleGrid::new(1.5);

    grid.insert(list[0], Vec3::ZERO);
    grid.insert(list[1], Vec3::new(1.0, 0.0, 0.0));
    grid.insert(list[2], Vec3::new(0.0, 1.4, 0.0));
    grid.insert(list[3], Vec3::new(5.0, 0.0, 0.0));

    let found = grid.within_radius(Vec3::ZERO, 1.5, list[0]);

    assert_eq!(found.len(), 2);
    assert!(found.contains(&list[1]));
    assert!(found.contains(&list[2]));
    assert!(!found.contains(&list[0]), "the popped bubble is excluded");
    assert!(!found.contains(&list[3]), "out of radius");
}

#[test]
fn test_grid_query_spans_cell_boundaries() {
    let (_world, list) = entities(2);
    let mut grid = BubbleGrid::new(1.5);

    // Either side of a cell boundary, 0.2 apart.
    grid.insert(list[0], Vec3::new(1.4, 0.0, 0.0));
    grid.insert(list[1], Vec3::new(1.6, 0.0, 0.0));

    let found = grid.within_radius(Vec3::new(1.4, 0.0, 0.0), 1.5, list[0]);
    assert_eq!(found, vec![list[1]]);
}

#[test]
fn test_grid_discovery_order_is_deterministic() {
    let (_world, list) = entities(4);
    let mut grid = BubbleGrid::new(1.5);
    // Insert in reverse to show ordering does not depend on insertion.
    for (i, bubble) in list.iter().take(3).enumerate().rev() {
        grid.insert(*bubble, Vec3::new(i as f32 * 0.3, 0.0, 0.0));
    }

    let probe = list[3];
    let a = grid.within_radius(Vec3::ZERO, 1.5, probe);
    let b = grid.within_radius(Vec3::ZERO, 1.5, probe);
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

// -----------------------------------------------------------------------------
// Pop causes
// -----------------------------------------------------------------------------

#[test]
fn test_chain_scan_causes() {
    assert!(PopCause::DirectHit.triggers_chain());
    assert!(PopCause::Eviction.triggers_chain());
    // The wave never cascades, and timeouts are quiet.
    assert!(!PopCause::Chain.triggers_chain());
    assert!(!PopCause::Expiry.triggers_chain());
    assert!(!PopCause::OutOfBounds.triggers_chain());
}
