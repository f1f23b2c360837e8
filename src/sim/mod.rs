//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, no wall clock
//! - Injected RNG only
//! - Stable iteration order (by alien slot)
//! - No rendering or platform dependencies

pub mod alien;
pub mod collision;
pub mod rect;
pub mod stars;
pub mod state;
pub mod tick;

pub use alien::{Surroundings, spawn_position, tier_for_score};
pub use collision::{apply_pickup, resolve_bullets, resolve_pickup, resolve_player_contact};
pub use rect::Rect;
pub use stars::{Star, Starfield};
pub use state::{
    Alien, AlienPool, AlienState, Bullet, Direction, DropTickets, Explosion, GameEvent,
    PickupKind, Player, World,
};
pub use tick::tick;
