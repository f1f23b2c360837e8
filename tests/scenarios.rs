//! End-to-end scenarios driven through `Game::tick` with synthetic input

use glam::Vec2;
use space_fight::consts::*;
use space_fight::highscores::{HighScores, Ledger};
use space_fight::sim::{AlienState, PickupKind};
use space_fight::ui::{Action, InputEvent, Screen, SettingsPage};
use space_fight::{Game, Settings};

fn game_with(ledger: HighScores) -> Game<HighScores> {
    let settings = Settings {
        star_count: 16,
        ..Default::default()
    };
    Game::new(&settings, ledger, 2024)
}

fn click(game: &mut Game<HighScores>, action: Action) {
    let at = game
        .layout()
        .items()
        .iter()
        .find(|i| i.action == Some(action))
        .map(|i| i.rect.center())
        .unwrap_or_else(|| panic!("{:?} not on {:?}", action, game.screen()));
    game.tick(&[InputEvent::PointerMoved(at), InputEvent::click(at)]);
}

fn full_ledger(score: u32) -> HighScores {
    let mut ledger = HighScores::new();
    for name in ["AA", "BB", "CC", "DD", "EE"] {
        ledger.insert(score, name).unwrap();
    }
    ledger
}

/// Park alien 0 on top of the ship with one life left
fn ram_player(game: &mut Game<HighScores>) {
    let world = game.world_mut();
    world.player.lives = 1;
    let target = world.player.rect.pos;
    let alien = world.aliens.get_mut(0).unwrap();
    alien.rect.pos = target;
    alien.lives = 1;
    alien.state = AlienState::Pursuing;
}

#[test]
fn test_rammed_with_low_score_goes_to_game_over() {
    let mut game = game_with(full_ledger(10));
    click(&mut game, Action::Start);
    game.session_mut().score = 10;
    ram_player(&mut game);

    let fx = game.tick(&[]);
    assert_eq!(game.world().player.lives, 0);
    assert_eq!(game.screen(), Screen::GameOver);
    assert_eq!(fx.sounds.len(), 1);
}

#[test]
fn test_rammed_with_record_score_goes_to_new_highscore() {
    let mut game = game_with(full_ledger(10));
    click(&mut game, Action::Start);
    game.session_mut().score = 11;
    ram_player(&mut game);

    game.tick(&[]);
    assert_eq!(game.screen(), Screen::NewHighscore);

    click(&mut game, Action::Continue);
    for glyph in ['K', 'O'] {
        click(&mut game, Action::Type(glyph));
    }
    click(&mut game, Action::Done);
    assert_eq!(game.screen(), Screen::HighscoreList);
    let rows = game.ledger().read();
    assert_eq!(rows[0].name, "KO");
    assert_eq!(rows[0].score, 11);
    assert_eq!(rows[4].name, "DD");

    click(&mut game, Action::Back);
    assert_eq!(game.screen(), Screen::Title);
}

#[test]
fn test_back_from_player_select_lands_on_settings() {
    let mut game = game_with(HighScores::new());
    click(&mut game, Action::OpenSettings);
    click(&mut game, Action::OpenPage(SettingsPage::PlayerSelect));
    assert_eq!(game.screen(), Screen::Settings(SettingsPage::PlayerSelect));
    click(&mut game, Action::Back);
    assert_eq!(game.screen(), Screen::Settings(SettingsPage::Menu));
}

#[test]
fn test_last_round_then_dry_fire() {
    let mut game = game_with(HighScores::new());
    click(&mut game, Action::Start);
    game.world_mut().player.ammo = 1;

    let aim = Vec2::new(SCREEN_WIDTH / 2.0, 0.0);
    let fx = game.tick(&[InputEvent::click(aim)]);
    assert_eq!(game.world().player.ammo, 0);
    assert_eq!(game.world().bullets.len(), 1);
    assert_eq!(fx.sounds.len(), 1);

    let fx = game.tick(&[InputEvent::click(aim)]);
    assert_eq!(game.world().player.ammo, 0);
    assert!(fx.sounds.is_empty());
    assert_eq!(game.world().bullets.len(), 1);
}

#[test]
fn test_second_freeze_resets_countdown() {
    let mut game = game_with(HighScores::new());
    click(&mut game, Action::Start);
    game.session_mut().start_freeze();
    for _ in 0..80 {
        game.tick(&[]);
    }
    assert_eq!(game.session().freeze_ticks, FREEZE_TICKS - 80);

    let world = game.world_mut();
    let target = world.player.rect.pos;
    let carrier = world.aliens.get_mut(3).unwrap();
    carrier.rect.pos = target;
    carrier.state = AlienState::Carrying(PickupKind::Freeze);

    game.tick(&[]);
    assert_eq!(game.session().freeze_ticks, FREEZE_TICKS);
    assert!(game.world().aliens.iter().all(|a| a.frozen));
}

#[test]
fn test_coins_survive_game_over_and_buy_upgrades() {
    let mut game = game_with(full_ledger(50));
    click(&mut game, Action::Start);
    game.session_mut().coins = 30;
    ram_player(&mut game);
    game.tick(&[]);
    assert_eq!(game.screen(), Screen::GameOver);

    click(&mut game, Action::GoHome);
    click(&mut game, Action::OpenSettings);
    click(&mut game, Action::OpenPage(SettingsPage::Upgrades));
    click(&mut game, Action::Buy(space_fight::session::Upgrade::Ammo));
    assert_eq!(game.session().coins, 0);
    assert_eq!(game.world().player.ammo, PLAYER_BASE_AMMO + AMMO_UPGRADE_AMOUNT);
}

#[test]
fn test_equal_scores_survive_until_pushed_out() {
    let mut ledger = HighScores::new();
    ledger.insert(100, "FIRST").unwrap();
    ledger.insert(100, "SECOND").unwrap();
    for (score, name) in [(200, "C"), (300, "D"), (400, "E")] {
        ledger.insert(score, name).unwrap();
    }
    let names: Vec<String> = ledger.read().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["E", "D", "C", "FIRST", "SECOND"]);

    assert_eq!(ledger.insert(500, "F").unwrap(), Some(1));
    let rows = ledger.read();
    assert_eq!(rows[4].name, "FIRST");
    assert!(rows.iter().all(|e| e.name != "SECOND"));
}
