//! Property tests over whole-world simulation runs

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use space_fight::consts::*;
use space_fight::session::{AmmoColor, Session};
use space_fight::sim::{self, Alien, AlienPool, Direction, World};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn screen() -> Vec2 {
    Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// One tick of scripted input: toggle a direction key, maybe fire
#[derive(Debug, Clone)]
struct Step {
    toggle: Option<usize>,
    fire: bool,
    cursor: (f32, f32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (
        prop::option::of(0usize..4),
        any::<bool>(),
        (0.0f32..SCREEN_WIDTH, 0.0f32..SCREEN_HEIGHT),
    )
        .prop_map(|(toggle, fire, cursor)| Step {
            toggle,
            fire,
            cursor,
        })
}

fn drive(world: &mut World, session: &mut Session, rng: &mut Pcg32, step: &Step) {
    if let Some(i) = step.toggle {
        let dir = DIRECTIONS[i];
        if world.player.is_held(dir) {
            world.player.release(dir);
        } else {
            world.player.press(dir);
        }
    }
    world.cursor = Vec2::new(step.cursor.0, step.cursor.1);
    if step.fire {
        world.fire(AmmoColor::Red);
    }
    sim::tick(world, session, rng);
}

fn exclusive(alien: &Alien) -> bool {
    let carrying = alien.carried().is_some();
    let exploding = alien.explosion().is_some();
    let pursuing = alien.is_pursuing();
    [carrying, exploding, pursuing].iter().filter(|s| **s).count() == 1
}

proptest! {
    #[test]
    fn test_player_stays_on_screen(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 1..300),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut session = Session::new();
        let mut world = World::new(screen(), 4, &session, &mut rng);
        world.player.lives = u32::MAX / 2;

        let slack = world.player.speed;
        for step in &steps {
            drive(&mut world, &mut session, &mut rng, step);
            // Movement happens after the clamp, so one step of overshoot is allowed
            let r = world.player.rect;
            prop_assert!(r.left() >= -slack);
            prop_assert!(r.top() >= -slack);
            prop_assert!(r.right() <= SCREEN_WIDTH + slack);
            prop_assert!(r.bottom() <= SCREEN_HEIGHT + slack);

            let mut clamped = world.player.clone();
            clamped.clamp_to_screen(screen());
            let r = clamped.rect;
            prop_assert!(r.left() >= 0.0 && r.right() <= SCREEN_WIDTH);
            prop_assert!(r.top() >= 0.0 && r.bottom() <= SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_alien_is_in_exactly_one_state(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 1..400),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut session = Session::new();
        let mut world = World::new(screen(), 4, &session, &mut rng);
        world.player.lives = u32::MAX / 2;
        world.player.ammo = u32::MAX / 2;

        for step in &steps {
            drive(&mut world, &mut session, &mut rng, step);
            prop_assert_eq!(world.aliens.len(), ALIEN_COUNT);
            for alien in world.aliens.iter() {
                prop_assert!(exclusive(alien));
                if alien.carried().is_some() {
                    prop_assert_eq!(alien.vel, Vec2::ZERO);
                    prop_assert!(alien.dropped_frames <= CARRY_TIMEOUT_TICKS);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_drops(seed in any::<u64>(), score in 0u32..200) {
        let run = |seed: u64| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool = AlienPool::spawn(screen(), &mut rng);
            let mut drops = Vec::new();
            for _ in 0..20 {
                for alien in pool.iter_mut() {
                    drops.push(alien.respawn(score, screen(), &mut rng));
                }
            }
            drops
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}
