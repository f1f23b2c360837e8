//! Game entities and world state
//!
//! Everything the per-tick simulation reads or mutates lives here. The
//! alien behaviour itself is in `alien.rs`; this file holds the data.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::stars::Starfield;
use crate::consts::*;
use crate::session::AmmoColor;

/// What a carrying alien is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Ammo,
    Heart,
    Freeze,
    Coin,
}

/// Explosion sub-animation progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    /// Ticks elapsed since the explosion started
    pub frame: u32,
}

impl Explosion {
    /// Image index 0..=4, five ticks per phase
    pub fn phase(&self) -> u32 {
        (self.frame / EXPLOSION_PHASE_TICKS).min(EXPLOSION_PHASES - 1)
    }

    pub fn finished(&self) -> bool {
        self.frame >= EXPLOSION_TICKS
    }
}

/// Alien behaviour state. Carrying and exploding are exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienState {
    /// Chasing the player (or frozen in place)
    Pursuing,
    /// Parked, showing a pickup until collected or timed out
    Carrying(PickupKind),
    Exploding(Explosion),
}

/// Per-alien drop lottery draws, evaluated at the next respawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTickets {
    pub heart: u32,
    pub ammo: u32,
    pub freeze: u32,
    pub coin: u32,
}

impl DropTickets {
    /// Draws used when the pool is first populated
    pub fn draw_initial(rng: &mut impl Rng) -> Self {
        Self {
            heart: rng.random_range(0..40),
            ammo: rng.random_range(5..16),
            freeze: rng.random_range(0..30),
            coin: rng.random_range(10..20),
        }
    }

    /// Draws used on every relocating respawn
    pub fn draw(rng: &mut impl Rng) -> Self {
        Self {
            heart: rng.random_range(0..40),
            ammo: rng.random_range(0..20),
            freeze: rng.random_range(0..30),
            coin: rng.random_range(10..20),
        }
    }

    /// Winning category, priority ammo > heart > freeze > coin
    pub fn winner(&self) -> Option<PickupKind> {
        if self.ammo == WINNING_TICKET {
            Some(PickupKind::Ammo)
        } else if self.heart == WINNING_TICKET {
            Some(PickupKind::Heart)
        } else if self.freeze == WINNING_TICKET {
            Some(PickupKind::Freeze)
        } else if self.coin == WINNING_TICKET {
            Some(PickupKind::Coin)
        } else {
            None
        }
    }

    /// Forfeit every ticket
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Zero every ticket except the one for `kind`
    pub fn keep_only(&mut self, kind: PickupKind) {
        let kept = *self;
        self.clear();
        match kind {
            PickupKind::Ammo => self.ammo = kept.ammo,
            PickupKind::Heart => self.heart = kept.heart,
            PickupKind::Freeze => self.freeze = kept.freeze,
            PickupKind::Coin => self.coin = kept.coin,
        }
    }
}

/// Movement key directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Facing in degrees [0, 360), visual only
    pub heading: f32,
    pub lives: u32,
    pub ammo: u32,
    pub speed: f32,
    /// Movement keys currently held (guards against key-repeat)
    held: [bool; 4],
}

impl Player {
    pub fn new(screen: Vec2, lives: u32, ammo: u32, speed: f32) -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            rect: Rect::centered(screen / 2.0, size),
            vel: Vec2::ZERO,
            heading: 0.0,
            lives,
            ammo,
            speed,
            held: [false; 4],
        }
    }

    /// Recentre and refill for a fresh run
    pub fn reset(&mut self, screen: Vec2, lives: u32, ammo: u32, speed: f32) {
        *self = Self::new(screen, lives, ammo, speed);
    }

    /// Key down: add this direction's velocity once
    pub fn press(&mut self, dir: Direction) {
        let slot = &mut self.held[dir.index()];
        if *slot {
            return;
        }
        *slot = true;
        self.vel += dir.unit() * self.speed;
    }

    /// Key up: remove what the matching press added
    pub fn release(&mut self, dir: Direction) {
        let slot = &mut self.held[dir.index()];
        if !*slot {
            return;
        }
        *slot = false;
        self.vel -= dir.unit() * self.speed;
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }

    /// Drop all held keys and stop
    pub fn halt(&mut self) {
        self.held = [false; 4];
        self.vel = Vec2::ZERO;
    }

    /// Snap back inside the screen if the box reached an edge
    pub fn clamp_to_screen(&mut self, screen: Vec2) {
        let r = &mut self.rect;
        if r.right() >= screen.x {
            r.pos.x = screen.x - r.size.x;
        }
        if r.left() <= 0.0 {
            r.pos.x = 0.0;
        }
        if r.top() <= 0.0 {
            r.pos.y = 0.0;
        }
        if r.bottom() >= screen.y {
            r.pos.y = screen.y - r.size.y;
        }
    }

    /// Clamp, then move, then face the cursor
    pub fn update(&mut self, screen: Vec2, cursor: Vec2) {
        self.clamp_to_screen(screen);
        self.rect.pos += self.vel;
        self.heading = crate::heading_degrees(self.rect.center(), cursor);
    }

    /// Spend one round toward `cursor`. None when out of ammo.
    pub fn fire(&mut self, cursor: Vec2, color: AmmoColor) -> Option<Bullet> {
        if self.ammo == 0 {
            return None;
        }
        self.ammo -= 1;
        Some(Bullet::fired(self.rect.center(), cursor, color))
    }
}

/// A player bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    pub vel: Vec2,
    pub color: AmmoColor,
}

impl Bullet {
    /// Spawn centred on `origin`, heading for `cursor` at fixed speed
    pub fn fired(origin: Vec2, cursor: Vec2, color: AmmoColor) -> Self {
        let d = origin - cursor;
        let angle = d.y.atan2(d.x);
        Self {
            rect: Rect::centered(origin, Vec2::splat(BULLET_SIZE)),
            vel: Vec2::new(angle.cos(), angle.sin()) * -BULLET_SPEED,
            color,
        }
    }

    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    /// Fully past the left/top edge, or past the right/bottom edge
    pub fn is_off_screen(&self, screen: Vec2) -> bool {
        self.rect.right() < 0.0
            || self.rect.bottom() < 0.0
            || self.rect.top() > screen.y
            || self.rect.left() > screen.x
    }
}

/// An alien slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub rect: Rect,
    pub vel: Vec2,
    /// Hit points, 1..=3; also the damage dealt on contact
    pub lives: u32,
    pub speed_multiplier: f32,
    pub state: AlienState,
    pub tickets: DropTickets,
    /// Ticks spent carrying the current pickup
    pub dropped_frames: u32,
    /// Mirrors the global freeze
    pub frozen: bool,
}

/// Fixed-size alien arena; slots are recycled in place
#[derive(Debug, Clone)]
pub struct AlienPool {
    slots: [Alien; ALIEN_COUNT],
}

impl AlienPool {
    /// Fill every slot with a fresh off-screen alien
    pub fn spawn(screen: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            slots: std::array::from_fn(|_| Alien::spawn(screen, &mut *rng)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Alien> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Alien> {
        self.slots.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Alien> {
        self.slots.iter_mut()
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        for alien in self.slots.iter_mut() {
            alien.frozen = frozen;
        }
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the ship
    Shot,
    /// Bullets took an alien's last life
    AlienKilled { slot: usize },
    /// An alien rammed the player
    PlayerHit { slot: usize, damage: u32 },
    /// A carried pickup was collected
    PickupCollected { slot: usize, kind: PickupKind },
    /// A carried pickup timed out
    PickupExpired { slot: usize },
    /// The global freeze wore off
    FreezeEnded,
}

/// Everything the simulation owns while a run is in progress
#[derive(Debug, Clone)]
pub struct World {
    pub screen: Vec2,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub aliens: AlienPool,
    pub stars: Starfield,
    /// Last known pointer position
    pub cursor: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    pub fn new(
        screen: Vec2,
        star_count: usize,
        session: &crate::session::Session,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            screen,
            player: Player::new(
                screen,
                session.starting_lives(),
                session.starting_ammo(),
                session.player_speed(),
            ),
            bullets: Vec::new(),
            aliens: AlienPool::spawn(screen, rng),
            stars: Starfield::new(screen, star_count, rng),
            cursor: screen / 2.0,
            time_ticks: 0,
        }
    }

    /// Fresh player and alien pool for a new run (stars keep scrolling)
    pub fn reset_run(&mut self, session: &crate::session::Session, rng: &mut impl Rng) {
        self.player.reset(
            self.screen,
            session.starting_lives(),
            session.starting_ammo(),
            session.player_speed(),
        );
        self.bullets.clear();
        self.aliens = AlienPool::spawn(self.screen, rng);
        self.time_ticks = 0;
    }

    /// Fire toward the cursor if ammo allows
    pub fn fire(&mut self, color: AmmoColor) -> Option<GameEvent> {
        let bullet = self.player.fire(self.cursor, color)?;
        self.bullets.push(bullet);
        Some(GameEvent::Shot)
    }
}
