//! Per-screen render list builder

use glam::Vec2;

use super::{AmmoGauge, RenderItem, Visual};
use crate::session::Session;
use crate::sim::{Alien, AlienState, Rect, World};
use crate::ui::menu::{CURSOR_SIZE, GAP, ICON_SIZE, Layout, SMALL_GLYPH_WIDTH, SMALL_TEXT_HEIGHT};
use crate::ui::Screen;

/// Ordered render list for one tick.
///
/// Stars always come first and the cursor always comes last. In between:
/// the HUD and entities while playing, aliens behind the pause overlay, or
/// the screen's menu items.
pub fn build_scene(
    screen: Screen,
    world: &World,
    session: &Session,
    layout: &Layout,
    pointer: Vec2,
) -> Vec<RenderItem> {
    let mut items: Vec<RenderItem> = world
        .stars
        .iter()
        .map(|star| RenderItem::new(star.rect, Visual::Star))
        .collect();

    match screen {
        Screen::Playing { paused: false } => {
            push_hud(&mut items, world, session);
            push_aliens(&mut items, world);
        }
        Screen::Playing { paused: true } => {
            items.extend(layout.render_items(pointer));
            push_aliens(&mut items, world);
        }
        _ => items.extend(layout.render_items(pointer)),
    }

    items.push(RenderItem::new(
        Rect::centered(pointer, Vec2::splat(CURSOR_SIZE)),
        Visual::Cursor(session.cursor_skin),
    ));
    items
}

fn small_text(text: String, pos: Vec2) -> RenderItem {
    let size = Vec2::new(text.chars().count() as f32 * SMALL_GLYPH_WIDTH, SMALL_TEXT_HEIGHT);
    RenderItem::new(Rect::new(pos, size), Visual::text(text))
}

fn push_hud(items: &mut Vec<RenderItem>, world: &World, session: &Session) {
    let label = small_text("SCORE:".to_string(), Vec2::splat(GAP));
    let number_pos = Vec2::new(label.rect.right() + GAP, GAP);
    let hearts_y = label.rect.bottom() + GAP;
    items.push(label);
    items.push(small_text(session.score.to_string(), number_pos));

    let player = &world.player;
    let ammo = player.ammo;
    let ammo_text = ammo.to_string();
    let ammo_size = Vec2::new(
        ammo_text.chars().count() as f32 * SMALL_GLYPH_WIDTH,
        SMALL_TEXT_HEIGHT,
    );
    items.push(RenderItem::new(
        Rect::new(Vec2::new(GAP, hearts_y + ICON_SIZE + GAP), ammo_size),
        Visual::AmmoCounter {
            ammo,
            gauge: AmmoGauge::for_ammo(ammo),
        },
    ));

    items.push(RenderItem::new(
        player.rect,
        Visual::Player {
            skin: session.player_skin,
            heading: player.heading,
        },
    ));
    items.extend(
        world
            .bullets
            .iter()
            .map(|b| RenderItem::new(b.rect, Visual::Bullet(b.color))),
    );

    for i in 0..player.lives {
        let x = GAP + i as f32 * (ICON_SIZE + GAP);
        items.push(RenderItem::new(
            Rect::new(Vec2::new(x, hearts_y), Vec2::splat(ICON_SIZE)),
            Visual::Heart,
        ));
    }
}

fn alien_visual(alien: &Alien) -> Visual {
    match alien.state {
        AlienState::Pursuing => Visual::Alien {
            lives: alien.lives,
            frozen: alien.frozen,
        },
        AlienState::Carrying(kind) => Visual::Pickup(kind),
        AlienState::Exploding(ex) => Visual::Explosion { phase: ex.phase() },
    }
}

fn push_aliens(items: &mut Vec<RenderItem>, world: &World) {
    items.extend(
        world
            .aliens
            .iter()
            .map(|alien| RenderItem::new(alien.rect, alien_visual(alien))),
    );
}
