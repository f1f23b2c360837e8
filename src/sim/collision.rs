//! Collision and combat resolution
//!
//! Axis-aligned box overlap is the only test. Each resolver handles one
//! alien against one kind of counterpart and applies the consequences in
//! place; nothing is re-checked within the same tick.

use super::state::{Alien, AlienState, Bullet, GameEvent, PickupKind, Player};
use crate::consts::AMMO_PICKUP;
use crate::session::Session;

/// Bullets against one pursuing alien.
///
/// Every overlapping bullet is consumed. Each takes one life while the
/// alien still has any, so lives bottom out at zero and the kill (score,
/// explosion) happens at most once. Returns true if this pass killed it.
pub fn resolve_bullets(
    slot: usize,
    alien: &mut Alien,
    bullets: &mut Vec<Bullet>,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut killed = false;
    bullets.retain(|bullet| {
        if !bullet.rect.intersects(&alien.rect) {
            return true;
        }
        if alien.lives > 0 {
            alien.lives -= 1;
            killed |= alien.lives == 0;
        }
        false
    });

    if killed {
        *score += 1;
        alien.start_exploding();
        events.push(GameEvent::AlienKilled { slot });
        log::debug!("Alien {} destroyed, score {}", slot, score);
    }
    killed
}

/// Alien ramming the player: damage equals the alien's remaining lives,
/// pending drop tickets are forfeited and the alien blows up.
pub fn resolve_player_contact(
    slot: usize,
    alien: &mut Alien,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
) -> bool {
    if !alien.rect.intersects(&player.rect) {
        return false;
    }
    let damage = alien.lives;
    alien.tickets.clear();
    player.lives = player.lives.saturating_sub(damage);
    alien.start_exploding();
    events.push(GameEvent::PlayerHit { slot, damage });
    log::debug!("Alien {} hit player for {}, {} lives left", slot, damage, player.lives);
    true
}

/// Player touching a carrier collects its pickup
pub fn resolve_pickup(
    slot: usize,
    alien: &Alien,
    player: &mut Player,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
) -> Option<PickupKind> {
    let AlienState::Carrying(kind) = alien.state else {
        return None;
    };
    if !alien.rect.intersects(&player.rect) {
        return None;
    }
    apply_pickup(kind, player, session);
    events.push(GameEvent::PickupCollected { slot, kind });
    log::debug!("Collected {:?} from alien {}", kind, slot);
    Some(kind)
}

pub fn apply_pickup(kind: PickupKind, player: &mut Player, session: &mut Session) {
    match kind {
        PickupKind::Ammo => player.ammo += AMMO_PICKUP,
        PickupKind::Heart => player.lives += 1,
        // Refreshes to full length even mid-freeze
        PickupKind::Freeze => session.start_freeze(),
        PickupKind::Coin => session.coins += 1,
    }
}
