//! Bubbles domain: system modules for the projectile pool tick.

pub(crate) mod capture;
pub(crate) mod pops;
pub(crate) mod solidity;
pub(crate) mod spawn;

pub(crate) use capture::capture_on_contact;
pub(crate) use pops::{
    collect_pop_requests, rebuild_grid, resolve_pops, tick_lifetimes, tick_scheduled_tasks,
};
pub(crate) use solidity::{apply_trampoline, update_solidity};
pub(crate) use spawn::{fire_bubbles, setup_bubble_assets};

pub use spawn::BubbleAssets;
