//! Alien behaviour and the drop engine
//!
//! Each alien slot cycles through pursuing, carrying a pickup, and
//! exploding. Respawn is instantaneous: it either parks the alien as a
//! pickup carrier (winning ticket) or relocates it off screen with a fresh
//! tier and fresh tickets.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::rect::Rect;
use super::state::{Alien, AlienState, Bullet, DropTickets, Explosion, GameEvent, PickupKind, Player};
use crate::consts::*;
use crate::session::Session;

/// Mutable view of everything an alien interacts with during its step
pub struct Surroundings<'a> {
    pub screen: Vec2,
    pub player: &'a mut Player,
    pub bullets: &'a mut Vec<Bullet>,
    pub session: &'a mut Session,
    pub events: &'a mut Vec<GameEvent>,
}

/// Random off-screen position, `band` units deep beyond a fixed margin.
///
/// Each axis independently picks the near or far side, so spawns land in
/// the diagonal corner regions.
pub fn spawn_position(screen: Vec2, band: i32, rng: &mut impl Rng) -> Vec2 {
    let w = screen.x as i32;
    let h = screen.y as i32;
    let x = if rng.random_range(0..2) == 0 {
        rng.random_range(-band..-SPAWN_MARGIN)
    } else {
        rng.random_range(w + SPAWN_MARGIN..w + band)
    };
    let y = if rng.random_range(0..2) == 0 {
        rng.random_range(-band..-SPAWN_MARGIN)
    } else {
        rng.random_range(h + SPAWN_MARGIN..h + band)
    };
    Vec2::new(x as f32, y as f32)
}

/// Hit points for a relocated alien given the current score
pub fn tier_for_score(score: u32, current_lives: u32) -> u32 {
    if score > 0 && score.is_multiple_of(10) {
        3
    } else if score > 0 && score.is_multiple_of(3) && current_lives != 3 {
        2
    } else {
        1
    }
}

impl Alien {
    /// A brand new weakest-tier alien somewhere off screen
    pub fn spawn(screen: Vec2, rng: &mut impl Rng) -> Self {
        let pos = spawn_position(screen, INITIAL_SPAWN_BAND, rng);
        Self {
            rect: Rect::new(pos, Vec2::splat(ALIEN_SIZE)),
            vel: Vec2::ZERO,
            lives: 1,
            speed_multiplier: 1.0,
            state: AlienState::Pursuing,
            tickets: DropTickets::draw_initial(rng),
            dropped_frames: 0,
            frozen: false,
        }
    }

    pub fn is_pursuing(&self) -> bool {
        self.state == AlienState::Pursuing
    }

    pub fn carried(&self) -> Option<PickupKind> {
        match self.state {
            AlienState::Carrying(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn explosion(&self) -> Option<Explosion> {
        match self.state {
            AlienState::Exploding(ex) => Some(ex),
            _ => None,
        }
    }

    /// Head straight for `target` unless frozen
    pub fn pursue(&mut self, target: Vec2) {
        if self.frozen {
            self.vel = Vec2::ZERO;
            return;
        }
        let speed = ALIEN_BASE_SPEED * self.speed_multiplier;
        self.vel = crate::aim_velocity(self.rect.center(), target, speed);
        self.rect.pos += self.vel;
    }

    pub fn start_exploding(&mut self) {
        self.vel = Vec2::ZERO;
        self.state = AlienState::Exploding(Explosion::default());
    }

    /// Speed up, then either become a carrier or relocate.
    ///
    /// Returns the pickup kind when a ticket won. A winning carrier keeps
    /// its current position.
    pub fn respawn(&mut self, score: u32, screen: Vec2, rng: &mut impl Rng) -> Option<PickupKind> {
        self.speed_multiplier *= ALIEN_SPEEDUP;
        self.dropped_frames = 0;
        self.vel = Vec2::ZERO;

        if let Some(kind) = self.tickets.winner() {
            self.tickets.keep_only(kind);
            self.state = AlienState::Carrying(kind);
            return Some(kind);
        }

        self.rect.pos = spawn_position(screen, RESPAWN_BAND, rng);
        self.lives = tier_for_score(score, self.lives);
        self.tickets = DropTickets::draw(rng);
        self.state = AlienState::Pursuing;
        None
    }

    /// Advance one tick
    pub fn step(&mut self, slot: usize, env: &mut Surroundings<'_>, rng: &mut impl Rng) {
        match self.state {
            AlienState::Pursuing => {
                self.pursue(env.player.rect.center());
                let killed = collision::resolve_bullets(
                    slot,
                    self,
                    env.bullets,
                    &mut env.session.score,
                    env.events,
                );
                if !killed {
                    collision::resolve_player_contact(slot, self, env.player, env.events);
                }
                if self.explosion().is_some() {
                    self.step_explosion(slot, env, rng);
                }
            }
            AlienState::Carrying(_) => self.step_carrying(slot, env, rng),
            AlienState::Exploding(_) => self.step_explosion(slot, env, rng),
        }
    }

    fn step_carrying(&mut self, slot: usize, env: &mut Surroundings<'_>, rng: &mut impl Rng) {
        self.vel = Vec2::ZERO;
        self.dropped_frames += 1;

        if collision::resolve_pickup(slot, self, env.player, env.session, env.events).is_some() {
            self.tickets.clear();
            self.respawn(env.session.score, env.screen, rng);
            return;
        }

        if self.dropped_frames >= CARRY_TIMEOUT_TICKS {
            log::debug!("Alien {} pickup expired", slot);
            self.tickets.clear();
            self.start_exploding();
            env.events.push(GameEvent::PickupExpired { slot });
            self.step_explosion(slot, env, rng);
        }
    }

    fn step_explosion(&mut self, slot: usize, env: &mut Surroundings<'_>, rng: &mut impl Rng) {
        self.vel = Vec2::ZERO;
        let AlienState::Exploding(mut ex) = self.state else {
            return;
        };
        if ex.finished() {
            if let Some(kind) = self.respawn(env.session.score, env.screen, rng) {
                log::debug!("Alien {} now carrying {:?}", slot, kind);
            }
            return;
        }
        ex.frame += 1;
        self.state = AlienState::Exploding(ex);
    }
}
