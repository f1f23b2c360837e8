//! Space Fight entry point
//!
//! Headless host: loads settings and the high score file, then drives the
//! core at a fixed tick rate. With `--demo` an autopilot plays.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use space_fight::audio::{AudioManager, AudioSink};
use space_fight::sim::GameEvent;
use space_fight::{FileLedger, Game, Settings};

#[derive(Parser, Debug)]
#[command(name = "space-fight")]
#[command(about = "Run the Space Fight core headless, optionally with an autopilot")]
struct Cli {
    /// Settings file (JSON); missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// High score file (overrides the settings file)
    #[arg(long)]
    ledger: Option<PathBuf>,
    /// Let the autopilot play
    #[arg(long)]
    demo: bool,
    /// Pace the loop to the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,
}

mod demo {
    use glam::Vec2;

    use space_fight::highscores::Ledger;
    use space_fight::sim::{Alien, Direction};
    use space_fight::ui::{Action, InputEvent, Key, Screen};
    use space_fight::Game;

    /// Ticks between shots
    const FIRE_INTERVAL: u64 = 8;
    /// Threats closer than this are fled from; farther ones allow pickup runs
    const DANGER_RADIUS: f32 = 250.0;
    const NAME: &str = "DEMO";

    /// Autopilot that plays through every screen using only input events
    #[derive(Debug, Default)]
    pub struct Pilot {
        held: [bool; 4],
        typed: usize,
        ticks: u64,
    }

    const KEYS: [(Direction, char); 4] = [
        (Direction::Up, 'w'),
        (Direction::Down, 's'),
        (Direction::Left, 'a'),
        (Direction::Right, 'd'),
    ];

    impl Pilot {
        pub fn new() -> Self {
            Self::default()
        }

        /// Input for the next tick
        pub fn events<L: Ledger>(&mut self, game: &Game<L>) -> Vec<InputEvent> {
            self.ticks += 1;
            let screen = game.screen();
            if !screen.is_playing() {
                // The core halts the ship on leaving the field
                self.held = [false; 4];
            }
            match screen {
                Screen::Title => click(game, Action::Start),
                Screen::Settings(_) | Screen::HighscoreList => click(game, Action::Back),
                Screen::Playing { paused: true } => vec![InputEvent::KeyDown(Key::Char('p'))],
                Screen::Playing { paused: false } => self.fly(game),
                Screen::GameOver => click(game, Action::Restart),
                Screen::NewHighscore => {
                    self.typed = 0;
                    click(game, Action::Continue)
                }
                Screen::EnterName => self.type_name(game),
            }
        }

        fn type_name<L: Ledger>(&mut self, game: &Game<L>) -> Vec<InputEvent> {
            match NAME.chars().nth(self.typed) {
                Some(glyph) => {
                    self.typed += 1;
                    click(game, Action::Type(glyph))
                }
                None => click(game, Action::Done),
            }
        }

        fn fly<L: Ledger>(&mut self, game: &Game<L>) -> Vec<InputEvent> {
            let world = game.world();
            let me = world.player.rect.center();
            let on_screen = |a: &&Alien| {
                let c = a.rect.center();
                c.x >= 0.0 && c.y >= 0.0 && c.x <= world.screen.x && c.y <= world.screen.y
            };
            let dist = |a: &&Alien| a.rect.center().distance(me);

            let threat = world
                .aliens
                .iter()
                .filter(|a| a.is_pursuing())
                .min_by(|a, b| dist(a).total_cmp(&dist(b)));
            let pickup = world
                .aliens
                .iter()
                .filter(|a| a.carried().is_some())
                .filter(on_screen)
                .min_by(|a, b| dist(a).total_cmp(&dist(b)));

            let mut heading = match (threat, pickup) {
                (Some(t), Some(p)) if dist(&t) > DANGER_RADIUS => p.rect.center() - me,
                (None, Some(p)) => p.rect.center() - me,
                (Some(t), _) if dist(&t) <= DANGER_RADIUS => me - t.rect.center(),
                _ => Vec2::ZERO,
            }
            .normalize_or_zero();
            // Drift back toward the middle to stay off the walls
            heading += (world.screen / 2.0 - me) / world.screen.length();

            let mut events = self.steer(heading);

            if self.ticks.is_multiple_of(FIRE_INTERVAL) && world.player.ammo > 0 {
                if let Some(target) = threat.filter(on_screen) {
                    let aim = target.rect.center();
                    events.push(InputEvent::PointerMoved(aim));
                    events.push(InputEvent::click(aim));
                }
            }
            events
        }

        /// Key transitions that make the held set match `heading`
        fn steer(&mut self, heading: Vec2) -> Vec<InputEvent> {
            let want = |dir: Direction| match dir {
                Direction::Up => heading.y < -0.3,
                Direction::Down => heading.y > 0.3,
                Direction::Left => heading.x < -0.3,
                Direction::Right => heading.x > 0.3,
            };
            let mut events = Vec::new();
            for (i, (dir, key)) in KEYS.into_iter().enumerate() {
                let wanted = want(dir);
                if wanted != self.held[i] {
                    self.held[i] = wanted;
                    events.push(if wanted {
                        InputEvent::KeyDown(Key::Char(key))
                    } else {
                        InputEvent::KeyUp(Key::Char(key))
                    });
                }
            }
            events
        }
    }

    /// Move to and click the item bound to `action`
    fn click<L: Ledger>(game: &Game<L>, action: Action) -> Vec<InputEvent> {
        let layout = game.layout();
        match layout.items().iter().find(|i| i.action == Some(action)) {
            Some(item) => {
                let at = item.rect.center();
                vec![InputEvent::PointerMoved(at), InputEvent::click(at)]
            }
            None => {
                log::warn!("Pilot found no {:?} on the {} screen", action, game.screen().name());
                Vec::new()
            }
        }
    }

}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(path) = cli.ledger {
        settings.ledger_path = path;
    }

    let ledger = FileLedger::open(&settings.ledger_path).with_context(|| {
        format!("opening high score file {}", settings.ledger_path.display())
    })?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Space Fight (headless) starting, seed {}", seed);

    let mut game = Game::new(&settings, ledger, seed);
    let mut pilot = cli.demo.then(demo::Pilot::new);
    let mut audio = AudioManager::new();
    let frame = Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate.max(1)));

    let mut kills = 0u64;
    let mut pickups = 0u64;
    let mut ticks = 0u64;
    while ticks < cli.ticks {
        let started = Instant::now();
        let events = match pilot.as_mut() {
            Some(pilot) => pilot.events(&game),
            None => Vec::new(),
        };

        let fx = game.tick(&events);
        ticks += 1;
        if fx.terminate {
            break;
        }
        for cue in fx.sounds {
            audio.play(cue);
        }
        for event in &fx.events {
            match event {
                GameEvent::AlienKilled { .. } => kills += 1,
                GameEvent::PickupCollected { .. } => pickups += 1,
                _ => {}
            }
        }

        if cli.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    let session = game.session();
    log::info!(
        "Stopped after {} ticks on the {} screen: score {}, coins {}, {} kills, {} pickups, {} cues",
        ticks,
        game.screen().name(),
        session.score,
        session.coins,
        kills,
        pickups,
        audio.played()
    );
    if let Some(best) = game.ledger().scores().top_score() {
        log::info!("Best on record: {}", best);
    }
    Ok(())
}
