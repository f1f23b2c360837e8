//! Screen/mode state machine
//!
//! [`Game::tick`] is the whole per-frame contract: drain the input batch
//! against the active screen, advance the simulation when playing, and
//! hand back cues, events and the render list.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::SoundEffect;
use crate::consts::{NAME_MAX_LEN, NAME_MIN_LEN};
use crate::highscores::Ledger;
use crate::renderer::{RenderItem, build_scene};
use crate::session::{Session, Upgrade};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, World};
use crate::ui::{Action, InputEvent, Key, Layout, MenuContext, PointerButton, Screen, SettingsPage};

/// Everything one tick asks of the host
#[derive(Debug, Clone, Default)]
pub struct TickEffects {
    /// Stop the process (Escape, window close, or QUIT)
    pub terminate: bool,
    /// Audio cues to fire, in order
    pub sounds: Vec<SoundEffect>,
    /// Simulation events, for logging and stats
    pub events: Vec<GameEvent>,
    /// Ordered render list, back to front
    pub scene: Vec<RenderItem>,
}

impl TickEffects {
    fn record(&mut self, event: GameEvent) {
        if let Some(cue) = SoundEffect::for_event(&event) {
            self.sounds.push(cue);
        }
        self.events.push(event);
    }
}

/// The game core: active screen, session, world, and the ledger it reports to
pub struct Game<L: Ledger> {
    screen: Screen,
    session: Session,
    world: World,
    ledger: L,
    rng: Pcg32,
    /// Name being typed on the entry screen
    name: String,
    /// Last known pointer position
    pointer: Vec2,
}

impl<L: Ledger> Game<L> {
    /// New game on the title screen. The RNG is seeded once here.
    pub fn new(settings: &Settings, ledger: L, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new();
        let world = World::new(settings.screen(), settings.star_count, &session, &mut rng);
        log::info!("New game (seed {})", seed);
        Self {
            screen: Screen::Title,
            session,
            pointer: world.cursor,
            world,
            ledger,
            rng,
            name: String::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Interactive items of the active screen
    pub fn layout(&self) -> Layout {
        let ledger = match self.screen {
            Screen::HighscoreList => self.ledger.read(),
            _ => Vec::new(),
        };
        let ctx = MenuContext {
            screen_size: self.world.screen,
            session: &self.session,
            name: &self.name,
            ledger: &ledger,
        };
        Layout::for_screen(self.screen, &ctx)
    }

    /// Advance one frame
    pub fn tick(&mut self, events: &[InputEvent]) -> TickEffects {
        let mut fx = TickEffects::default();

        for event in events {
            if self.handle_event(event, &mut fx) {
                log::info!("Terminate requested on {} screen", self.screen.name());
                fx.terminate = true;
                return fx;
            }
        }

        let paused = self.screen.is_paused();
        if self.screen.is_playing() && !paused {
            for event in sim::tick(&mut self.world, &mut self.session, &mut self.rng) {
                fx.record(event);
            }
            self.check_death();
        }
        if !paused {
            self.world.stars.advance(self.world.screen);
        }

        let layout = self.layout();
        fx.scene = build_scene(self.screen, &self.world, &self.session, &layout, self.pointer);
        fx
    }

    /// Route one event. Returns true if the process should stop.
    fn handle_event(&mut self, event: &InputEvent, fx: &mut TickEffects) -> bool {
        if let Some(pos) = event.pointer() {
            self.pointer = pos;
            self.world.cursor = pos;
        }

        match *event {
            InputEvent::CloseRequested | InputEvent::KeyDown(Key::Escape) => true,
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => self.click(pos, fx),
            InputEvent::KeyDown(key) => {
                if !self.screen.is_playing() {
                    return false;
                }
                if key.is_pause() {
                    let paused = !self.screen.is_paused();
                    self.set_screen(Screen::Playing { paused });
                } else if let Some(dir) = key.direction() {
                    self.world.player.press(dir);
                }
                false
            }
            InputEvent::KeyUp(key) => {
                if self.screen.is_playing() {
                    if let Some(dir) = key.direction() {
                        self.world.player.release(dir);
                    }
                }
                false
            }
            InputEvent::PointerMoved(_)
            | InputEvent::PointerDown { .. }
            | InputEvent::PointerUp { .. } => false,
        }
    }

    fn click(&mut self, pos: Vec2, fx: &mut TickEffects) -> bool {
        if self.screen == (Screen::Playing { paused: false }) {
            if let Some(event) = self.world.fire(self.session.ammo_color) {
                fx.record(event);
            }
            return false;
        }
        match self.layout().hit_test(pos) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Carry out a menu action. Returns true on QUIT.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Start => {
                self.world.bullets.clear();
                self.set_screen(Screen::Playing { paused: false });
            }
            Action::OpenSettings => self.set_screen(Screen::Settings(SettingsPage::Menu)),
            Action::OpenHighscores => self.set_screen(Screen::HighscoreList),
            Action::OpenPage(page) => self.set_screen(Screen::Settings(page)),
            Action::Back => {
                if let Some(prev) = self.screen.back() {
                    self.set_screen(prev);
                }
            }
            Action::SelectPlayer(skin) => {
                self.session.player_skin = skin;
                self.world.player.lives = self.session.starting_lives();
            }
            Action::SelectAmmo(color) => self.session.ammo_color = color,
            Action::SelectCursor(skin) => self.session.cursor_skin = skin,
            Action::Buy(upgrade) => {
                if self.session.purchase(upgrade) {
                    self.apply_upgrade(upgrade);
                }
            }
            Action::GoHome => {
                self.reset_run();
                self.set_screen(Screen::Title);
            }
            Action::Restart => {
                self.reset_run();
                self.set_screen(Screen::Playing { paused: false });
            }
            Action::Continue => self.set_screen(Screen::EnterName),
            Action::Type(glyph) => self.name.push(glyph),
            Action::Backspace => {
                self.name.pop();
            }
            Action::Done => self.submit_name(),
        }
        false
    }

    /// Upgrades take effect on the current ship right away
    fn apply_upgrade(&mut self, upgrade: Upgrade) {
        let player = &mut self.world.player;
        match upgrade {
            Upgrade::Speed => player.speed = self.session.player_speed(),
            Upgrade::Lives => player.lives = self.session.starting_lives(),
            Upgrade::Ammo => player.ammo = self.session.starting_ammo(),
        }
    }

    fn submit_name(&mut self) {
        let len = self.name.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return;
        }
        let score = self.session.score;
        match self.ledger.insert(score, &self.name) {
            Ok(Some(rank)) => log::info!("{} placed #{} with {}", self.name, rank, score),
            Ok(None) => log::info!("{} scored {}, off the board", self.name, score),
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
        self.name.clear();
        self.reset_run();
        self.set_screen(Screen::HighscoreList);
    }

    fn check_death(&mut self) {
        if self.world.player.lives > 0 {
            return;
        }
        let score = self.session.score;
        let to_beat = self.ledger.fifth_score();
        log::info!("Player died with score {} (5th place {})", score, to_beat);
        if score > to_beat {
            self.set_screen(Screen::NewHighscore);
        } else {
            self.set_screen(Screen::GameOver);
        }
    }

    /// Score and freeze cleared, fresh ship and alien pool
    fn reset_run(&mut self) {
        self.session.reset_run();
        self.world.reset_run(&self.session, &mut self.rng);
        log::info!("Run reset");
    }

    fn set_screen(&mut self, next: Screen) {
        if self.screen == next {
            return;
        }
        log::info!("Screen: {} -> {}", self.screen.name(), next.name());
        if self.screen.is_playing() && !next.is_playing() {
            self.world.player.halt();
        }
        self.screen = next;
    }
}
