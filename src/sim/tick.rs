//! Fixed timestep simulation tick
//!
//! Advances one PLAYING frame: freeze countdown, player, bullets, then
//! every alien slot in index order.

use rand::Rng;

use super::alien::Surroundings;
use super::state::{GameEvent, World};
use crate::session::Session;

/// Advance the world by one tick and report what happened
pub fn tick(world: &mut World, session: &mut Session, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    if session.advance_freeze() {
        log::debug!("Freeze ended");
        events.push(GameEvent::FreezeEnded);
    }
    world.aliens.set_frozen(session.freeze_active());

    world.player.update(world.screen, world.cursor);

    let screen = world.screen;
    for bullet in &mut world.bullets {
        bullet.advance();
    }
    world.bullets.retain(|b| !b.is_off_screen(screen));

    // Split borrows: aliens mutate while seeing the player and bullets
    let World {
        player,
        bullets,
        aliens,
        ..
    } = world;
    let mut env = Surroundings {
        screen,
        player,
        bullets,
        session: &mut *session,
        events: &mut events,
    };
    for (slot, alien) in aliens.iter_mut().enumerate() {
        alien.step(slot, &mut env, rng);
    }

    // A freeze picked up mid-loop applies to every slot from the next tick
    world.aliens.set_frozen(session.freeze_active());
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::session::AmmoColor;
    use crate::sim::state::{AlienState, Bullet, PickupKind};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(seed: u64) -> (World, Session, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new();
        let world = World::new(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), 10, &session, &mut rng);
        (world, session, rng)
    }

    #[test]
    fn test_tick_advances_time_and_bullets() {
        let (mut world, mut session, mut rng) = setup(1);
        world.cursor = world.player.rect.center() + Vec2::new(0.0, -100.0);
        world.fire(AmmoColor::Green);
        let y0 = world.bullets[0].rect.pos.y;

        tick(&mut world, &mut session, &mut rng);
        assert_eq!(world.time_ticks, 1);
        assert!((world.bullets[0].rect.pos.y - (y0 - BULLET_SPEED)).abs() < 1e-3);
    }

    #[test]
    fn test_off_screen_bullets_are_dropped() {
        let (mut world, mut session, mut rng) = setup(2);
        world.bullets.push(Bullet::fired(
            Vec2::new(5.0, 5.0),
            Vec2::new(100.0, 5.0),
            AmmoColor::Blue,
        ));
        world.bullets[0].vel = Vec2::new(-20.0, 0.0);
        tick(&mut world, &mut session, &mut rng);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_freeze_stops_every_alien() {
        let (mut world, mut session, mut rng) = setup(3);
        session.start_freeze();
        let before: Vec<Vec2> = world.aliens.iter().map(|a| a.rect.pos).collect();
        tick(&mut world, &mut session, &mut rng);
        let after: Vec<Vec2> = world.aliens.iter().map(|a| a.rect.pos).collect();
        assert_eq!(before, after);
        assert!(world.aliens.iter().all(|a| a.frozen));
        assert_eq!(session.freeze_ticks, FREEZE_TICKS - 1);
    }

    #[test]
    fn test_freeze_end_event_and_thaw() {
        let (mut world, mut session, mut rng) = setup(4);
        session.freeze_ticks = 1;
        let events = tick(&mut world, &mut session, &mut rng);
        assert!(events.contains(&GameEvent::FreezeEnded));
        assert!(world.aliens.iter().all(|a| !a.frozen));
    }

    #[test]
    fn test_freeze_pickup_refreshes_running_freeze() {
        let (mut world, mut session, mut rng) = setup(5);
        session.freeze_ticks = 50;
        let carrier = world.aliens.get_mut(0).unwrap();
        carrier.rect.pos = world.player.rect.pos;
        carrier.state = AlienState::Carrying(PickupKind::Freeze);

        let events = tick(&mut world, &mut session, &mut rng);
        assert!(events.contains(&GameEvent::PickupCollected {
            slot: 0,
            kind: PickupKind::Freeze
        }));
        assert_eq!(session.freeze_ticks, FREEZE_TICKS);
        assert!(world.aliens.iter().all(|a| a.frozen));
    }

    #[test]
    fn test_same_seed_same_world() {
        let run = |seed| {
            let (mut world, mut session, mut rng) = setup(seed);
            for _ in 0..120 {
                tick(&mut world, &mut session, &mut rng);
            }
            world
                .aliens
                .iter()
                .map(|a| (a.rect.pos, a.state))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
