//! Audio cue triggers
//!
//! The core only names cues; playing them is the host's job. Cues are
//! fire-and-forget and never block a tick.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Shoot,
    /// Alien destroyed by bullets or rammed into the player
    Explosion,
}

impl SoundEffect {
    /// Cue name as the host knows it
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Explosion => "explosion",
        }
    }

    /// The cue a simulation event triggers, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot => Some(SoundEffect::Shoot),
            GameEvent::AlienKilled { .. } | GameEvent::PlayerHit { .. } => {
                Some(SoundEffect::Explosion)
            }
            GameEvent::PickupCollected { .. }
            | GameEvent::PickupExpired { .. }
            | GameEvent::FreezeEnded => None,
        }
    }
}

/// Host-side cue player
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager that reports cues to the log instead of a device
#[derive(Debug, Default)]
pub struct AudioManager {
    muted: bool,
    played: u64,
}

impl AudioManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Cues played since start-up (muted cues are not counted)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::trace!("cue: {}", effect.name());
    }
}
