//! Space Fight - a top-down survive-and-shoot arcade core
//!
//! Core modules:
//! - `sim`: Deterministic entity simulation (player, bullets, aliens, drops)
//! - `session`: Score, coins, upgrades and cosmetic selections
//! - `game`: Screen/mode state machine and per-tick input routing
//! - `ui`: Decoded input events and per-screen interactive layouts
//! - `renderer`: Render handoff (ordered visible items per tick)
//! - `highscores`: Top-5 ledger collaborator
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Game, TickEffects};
pub use highscores::{FileLedger, HighScores, Ledger};
pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 1360.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Nominal tick rate (paced by the host, not the core)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Entity box sizes
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const ALIEN_SIZE: f32 = 40.0;
    pub const BULLET_SIZE: f32 = 10.0;
    pub const STAR_SIZE: f32 = 2.0;

    /// Player defaults (before upgrades)
    pub const PLAYER_BASE_SPEED: f32 = 5.0;
    pub const PLAYER_BASE_LIVES: u32 = 3;
    pub const PLAYER_BASE_AMMO: u32 = 100;

    /// Bullet speed in units per tick
    pub const BULLET_SPEED: f32 = 20.0;

    /// Alien pool size (fixed, recycled by respawn)
    pub const ALIEN_COUNT: usize = 30;
    /// Base pursuit speed, scaled by the alien's speed multiplier
    pub const ALIEN_BASE_SPEED: f32 = 2.0;
    /// Multiplier growth applied on every respawn
    pub const ALIEN_SPEEDUP: f32 = 1.05;
    /// Off-screen spawn bands (distance past the screen edge)
    pub const INITIAL_SPAWN_BAND: i32 = 2100;
    pub const RESPAWN_BAND: i32 = 2600;
    /// Gap between the screen edge and the nearest spawn position
    pub const SPAWN_MARGIN: i32 = 100;

    /// The one ticket value that wins a drop
    pub const WINNING_TICKET: u32 = 15;
    /// Ticks a carried pickup waits before exploding unclaimed
    pub const CARRY_TIMEOUT_TICKS: u32 = 360;
    /// Explosion animation length and phase width
    pub const EXPLOSION_TICKS: u32 = 25;
    pub const EXPLOSION_PHASE_TICKS: u32 = 5;
    pub const EXPLOSION_PHASES: u32 = 5;

    /// Pickup payloads
    pub const AMMO_PICKUP: u32 = 25;
    pub const FREEZE_TICKS: u32 = 200;

    /// Upgrade costs (coins) and payloads
    pub const SPEED_UPGRADE_COST: u32 = 10;
    pub const LIFE_UPGRADE_COST: u32 = 20;
    pub const AMMO_UPGRADE_COST: u32 = 30;
    pub const AMMO_UPGRADE_AMOUNT: u32 = 20;

    /// Name entry bounds (inclusive)
    pub const NAME_MIN_LEN: usize = 2;
    pub const NAME_MAX_LEN: usize = 9;
}

/// Heading in degrees [0, 360) for a sprite at `center` facing `target`.
///
/// Matches the rotated-sprite convention: 0° points right, angles grow
/// counter-clockwise on a y-down screen.
#[inline]
pub fn heading_degrees(center: Vec2, target: Vec2) -> f32 {
    let d = center - target;
    let raw = 360.0 - (d.y.atan2(d.x).to_degrees() + 180.0);
    raw.rem_euclid(360.0)
}

/// Velocity of magnitude `speed` pointing from `from` toward `to`.
///
/// Uses the atan2 form so coincident points yield a rightward vector
/// instead of NaN.
#[inline]
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let d = to - from;
    let angle = d.y.atan2(d.x);
    Vec2::new(angle.cos(), angle.sin()) * speed
}
