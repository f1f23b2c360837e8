//! Per-screen interactive layouts
//!
//! Every screen registers its items in a fixed order. A click resolves to
//! the first interactive item whose box contains the pointer; the same
//! boxes drive hover highlighting and rendering.

use glam::Vec2;

use super::{Screen, SettingsPage};
use crate::highscores::HighScoreEntry;
use crate::renderer::{RenderItem, Visual};
use crate::session::{AmmoColor, CursorSkin, PlayerSkin, Session, Upgrade};
use crate::sim::Rect;

/// Spacing used around screen edges and between neighbours
pub const GAP: f32 = 10.0;
/// Menu font cell
pub const GLYPH_WIDTH: f32 = 24.0;
pub const TEXT_HEIGHT: f32 = 32.0;
/// HUD font cell
pub const SMALL_GLYPH_WIDTH: f32 = 14.0;
pub const SMALL_TEXT_HEIGHT: f32 = 20.0;

pub const BANNER_SIZE: Vec2 = Vec2::new(640.0, 200.0);
pub const ICON_SIZE: f32 = 32.0;
pub const PORTRAIT_SIZE: f32 = 128.0;
pub const SAMPLE_SIZE: f32 = 64.0;
pub const CURSOR_SIZE: f32 = 24.0;

/// What clicking an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    OpenSettings,
    OpenHighscores,
    Quit,
    Back,
    OpenPage(SettingsPage),
    SelectPlayer(PlayerSkin),
    SelectAmmo(AmmoColor),
    SelectCursor(CursorSkin),
    Buy(Upgrade),
    GoHome,
    Restart,
    Continue,
    Type(char),
    Backspace,
    Done,
}

/// A registered screen item; inert when `action` is None
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub rect: Rect,
    pub visual: Visual,
    pub action: Option<Action>,
}

impl MenuItem {
    /// Text item with its top-left corner at `pos`
    pub fn label(text: &str, pos: Vec2, action: Option<Action>) -> Self {
        Self {
            rect: Rect::new(pos, text_size(text)),
            visual: Visual::text(text),
            action,
        }
    }

    pub fn picture(visual: Visual, rect: Rect, action: Option<Action>) -> Self {
        Self {
            rect,
            visual,
            action,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.action.is_some()
    }
}

/// Menu font extent of `text`
pub fn text_size(text: &str) -> Vec2 {
    Vec2::new(text.chars().count() as f32 * GLYPH_WIDTH, TEXT_HEIGHT)
}

/// State the layouts read from
#[derive(Debug, Clone, Copy)]
pub struct MenuContext<'a> {
    pub screen_size: Vec2,
    pub session: &'a Session,
    /// Name typed so far on the entry screen
    pub name: &'a str,
    /// Ledger rows, best first
    pub ledger: &'a [HighScoreEntry],
}

/// The ordered item list of one screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    items: Vec<MenuItem>,
}

impl Layout {
    pub fn for_screen(screen: Screen, ctx: &MenuContext<'_>) -> Self {
        let mut layout = Layout::default();
        match screen {
            Screen::Title => layout.title(ctx),
            Screen::Settings(page) => {
                layout.back();
                match page {
                    SettingsPage::Menu => layout.stack(
                        ctx,
                        &[
                            ("CURSOR", Some(Action::OpenPage(SettingsPage::CursorSelect))),
                            ("BULLET", Some(Action::OpenPage(SettingsPage::BulletSelect))),
                            ("PLAYER", Some(Action::OpenPage(SettingsPage::PlayerSelect))),
                            ("UPGRADES", Some(Action::OpenPage(SettingsPage::Upgrades))),
                        ],
                    ),
                    SettingsPage::PlayerSelect => layout.player_select(ctx),
                    SettingsPage::BulletSelect => layout.bullet_select(ctx),
                    SettingsPage::CursorSelect => layout.cursor_select(ctx),
                    SettingsPage::Upgrades => layout.upgrades(ctx),
                }
            }
            Screen::Playing { paused: false } => {}
            Screen::Playing { paused: true } => layout.stack(
                ctx,
                &[
                    ("PAUSED", None),
                    ("GO HOME", Some(Action::GoHome)),
                    ("QUIT", Some(Action::Quit)),
                ],
            ),
            Screen::GameOver => layout.stack(
                ctx,
                &[
                    ("GAME OVER!", None),
                    ("RESTART", Some(Action::Restart)),
                    ("GO HOME", Some(Action::GoHome)),
                    ("QUIT", Some(Action::Quit)),
                ],
            ),
            Screen::NewHighscore => {
                let score = ctx.session.score.to_string();
                layout.stack(
                    ctx,
                    &[
                        ("NEW HIGHSCORE!", None),
                        (score.as_str(), None),
                        ("CONTINUE", Some(Action::Continue)),
                    ],
                )
            }
            Screen::EnterName => layout.keyboard(ctx),
            Screen::HighscoreList => {
                layout.back();
                layout.highscores(ctx);
            }
        }
        layout
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// First interactive item under `point`, by registration order
    pub fn hit_test(&self, point: Vec2) -> Option<Action> {
        self.items
            .iter()
            .filter(|item| item.rect.contains(point))
            .find_map(|item| item.action)
    }

    /// Render items in registration order, hovered text highlighted
    pub fn render_items(&self, pointer: Vec2) -> Vec<RenderItem> {
        self.items
            .iter()
            .map(|item| {
                let mut visual = item.visual.clone();
                if let Visual::Text { highlighted, .. } = &mut visual {
                    *highlighted = item.is_interactive() && item.rect.contains(pointer);
                }
                RenderItem::new(item.rect, visual)
            })
            .collect()
    }

    fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    fn back(&mut self) {
        self.push(MenuItem::label("BACK", Vec2::splat(GAP), Some(Action::Back)));
    }

    /// Horizontally centred column, item i centred at (i + 1) / (n + 1) of the height
    fn stack(&mut self, ctx: &MenuContext<'_>, entries: &[(&str, Option<Action>)]) {
        let screen = ctx.screen_size;
        let step = screen.y / (entries.len() + 1) as f32;
        for (i, (text, action)) in entries.iter().enumerate() {
            let center = Vec2::new(screen.x / 2.0, (i + 1) as f32 * step);
            self.push(MenuItem {
                rect: Rect::centered(center, text_size(text)),
                visual: Visual::text(*text),
                action: *action,
            });
        }
    }

    /// Pictures spread evenly across the middle row
    fn picture_row(&mut self, ctx: &MenuContext<'_>, size: f32, entries: &[(Visual, Action)]) {
        let screen = ctx.screen_size;
        let step = screen.x / (entries.len() + 1) as f32;
        for (i, (visual, action)) in entries.iter().enumerate() {
            let center = Vec2::new((i + 1) as f32 * step, screen.y / 2.0);
            self.push(MenuItem::picture(
                visual.clone(),
                Rect::centered(center, Vec2::splat(size)),
                Some(*action),
            ));
        }
    }

    /// Arrow over the picture for the current choice
    fn selection_arrow(&mut self, over: Rect) {
        let pos = Vec2::new(
            over.center().x - ICON_SIZE / 2.0,
            over.top() - ICON_SIZE - GAP,
        );
        self.push(MenuItem::picture(
            Visual::SelectionArrow,
            Rect::new(pos, Vec2::splat(ICON_SIZE)),
            None,
        ));
    }

    /// Coin icon and balance in the top-right corner
    fn coin_balance(&mut self, ctx: &MenuContext<'_>) {
        let screen = ctx.screen_size;
        let coin = Rect::new(
            Vec2::new(screen.x - ICON_SIZE - GAP, GAP),
            Vec2::splat(ICON_SIZE),
        );
        self.push(MenuItem::picture(Visual::Coin, coin, None));

        let count = ctx.session.coins.to_string();
        let size = text_size(&count);
        let pos = Vec2::new(coin.left() - size.x - GAP, GAP - 3.0);
        self.push(MenuItem::label(&count, pos, None));
    }

    fn title(&mut self, ctx: &MenuContext<'_>) {
        let screen = ctx.screen_size;
        self.push(MenuItem::picture(
            Visual::TitleBanner,
            Rect::new(Vec2::new((screen.x - BANNER_SIZE.x) / 2.0, 20.0), BANNER_SIZE),
            None,
        ));

        // Buttons sit in the lower part, below the banner
        let step = screen.y / 13.0;
        let buttons = [
            ("START", Action::Start),
            ("HIGHSCORES", Action::OpenHighscores),
            ("SETTINGS", Action::OpenSettings),
            ("QUIT", Action::Quit),
        ];
        for (i, (text, action)) in buttons.into_iter().enumerate() {
            let center = Vec2::new(screen.x / 2.0, (i as f32 + 8.25) * step);
            self.push(MenuItem {
                rect: Rect::centered(center, text_size(text)),
                visual: Visual::text(text),
                action: Some(action),
            });
        }

        self.coin_balance(ctx);
    }

    fn player_select(&mut self, ctx: &MenuContext<'_>) {
        let entries: Vec<(Visual, Action)> = PlayerSkin::ALL
            .iter()
            .map(|&skin| (Visual::PlayerPortrait(skin), Action::SelectPlayer(skin)))
            .collect();
        self.picture_row(ctx, PORTRAIT_SIZE, &entries);
        let selected = Action::SelectPlayer(ctx.session.player_skin);
        if let Some(rect) = self.rect_of(selected) {
            self.selection_arrow(rect);
        }
    }

    fn bullet_select(&mut self, ctx: &MenuContext<'_>) {
        let entries: Vec<(Visual, Action)> = AmmoColor::ALL
            .iter()
            .map(|&color| (Visual::AmmoSample(color), Action::SelectAmmo(color)))
            .collect();
        self.picture_row(ctx, SAMPLE_SIZE, &entries);
        let selected = Action::SelectAmmo(ctx.session.ammo_color);
        if let Some(rect) = self.rect_of(selected) {
            self.selection_arrow(rect);
        }
    }

    fn cursor_select(&mut self, ctx: &MenuContext<'_>) {
        let entries: Vec<(Visual, Action)> = CursorSkin::ALL
            .iter()
            .map(|&skin| (Visual::CursorSample(skin), Action::SelectCursor(skin)))
            .collect();
        self.picture_row(ctx, SAMPLE_SIZE, &entries);
    }

    fn upgrades(&mut self, ctx: &MenuContext<'_>) {
        let screen = ctx.screen_size;
        for (i, upgrade) in Upgrade::ALL.into_iter().enumerate() {
            let label = upgrade.label();
            let center = Vec2::new(screen.x / 2.0, (i + 1) as f32 * screen.y / 4.0);
            let rect = Rect::centered(center, text_size(label));
            self.push(MenuItem {
                rect,
                visual: Visual::text(label),
                action: Some(Action::Buy(upgrade)),
            });
            // Price tag
            self.push(MenuItem::picture(
                Visual::Coin,
                Rect::new(
                    Vec2::new(rect.right() + GAP, rect.top()),
                    Vec2::splat(ICON_SIZE),
                ),
                None,
            ));
        }
        self.coin_balance(ctx);
    }

    fn highscores(&mut self, ctx: &MenuContext<'_>) {
        let screen = ctx.screen_size;
        let step = screen.y / 7.0;
        let heading = "HIGHSCORES";
        self.push(MenuItem {
            rect: Rect::centered(Vec2::new(screen.x / 2.0, step), text_size(heading)),
            visual: Visual::text(heading),
            action: None,
        });

        for (i, entry) in ctx.ledger.iter().enumerate() {
            let score = entry.score.to_string();
            let score_size = text_size(&score);
            let name_size = text_size(&entry.name);
            let y = (i + 2) as f32 * step - TEXT_HEIGHT / 2.0;
            let score_x = screen.x / 2.0 - (score_size.x + name_size.x / 2.0);
            self.push(MenuItem::label(&score, Vec2::new(score_x, y), None));
            self.push(MenuItem::label(
                &entry.name,
                Vec2::new(score_x + score_size.x + 50.0, y),
                None,
            ));
        }
    }

    fn keyboard(&mut self, ctx: &MenuContext<'_>) {
        let screen = ctx.screen_size;
        let key_size = Vec2::new(GLYPH_WIDTH, TEXT_HEIGHT);
        let key_center = |i: usize| {
            let (row, col) = (i / 8, i % 8);
            Vec2::new(
                (col + 1) as f32 * screen.x / 9.0,
                (row + 2) as f32 * screen.y / 6.0,
            )
        };

        for (i, glyph) in ('A'..='Z').enumerate() {
            let mut buf = [0u8; 4];
            let text = glyph.encode_utf8(&mut buf);
            self.push(MenuItem {
                rect: Rect::centered(key_center(i), key_size),
                visual: Visual::text(&*text),
                action: Some(Action::Type(glyph)),
            });
        }

        // Edit keys share the last row, lined up under the 3rd and 7th columns
        let last_row = key_center(25).y - TEXT_HEIGHT / 2.0;
        let column_x = |i: usize| key_center(i).x - GLYPH_WIDTH / 2.0;
        self.push(MenuItem::label(
            "BCKSPC",
            Vec2::new(column_x(2), last_row),
            Some(Action::Backspace),
        ));
        self.push(MenuItem::label(
            "DONE",
            Vec2::new(column_x(6), last_row),
            Some(Action::Done),
        ));

        self.push(MenuItem {
            rect: Rect::centered(Vec2::new(screen.x / 2.0, screen.y / 6.0), text_size(ctx.name)),
            visual: Visual::text(ctx.name),
            action: None,
        });
    }

    fn rect_of(&self, action: Action) -> Option<Rect> {
        self.items
            .iter()
            .find(|item| item.action == Some(action))
            .map(|item| item.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn ctx<'a>(session: &'a Session, ledger: &'a [HighScoreEntry]) -> MenuContext<'a> {
        MenuContext {
            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            session,
            name: "",
            ledger,
        }
    }

    fn center_of(layout: &Layout, action: Action) -> Vec2 {
        layout.rect_of(action).unwrap().center()
    }

    #[test]
    fn test_title_hit_test() {
        let session = Session::new();
        let layout = Layout::for_screen(Screen::Title, &ctx(&session, &[]));
        for action in [
            Action::Start,
            Action::OpenHighscores,
            Action::OpenSettings,
            Action::Quit,
        ] {
            assert_eq!(layout.hit_test(center_of(&layout, action)), Some(action));
        }
        // Banner is inert
        assert_eq!(layout.hit_test(Vec2::new(SCREEN_WIDTH / 2.0, 100.0)), None);
    }

    #[test]
    fn test_first_registered_item_wins() {
        let mut layout = Layout::default();
        let rect = Rect::new(Vec2::ZERO, Vec2::splat(50.0));
        layout.push(MenuItem::picture(Visual::Coin, rect, None));
        layout.push(MenuItem::picture(Visual::Coin, rect, Some(Action::Back)));
        layout.push(MenuItem::picture(Visual::Coin, rect, Some(Action::Quit)));
        assert_eq!(layout.hit_test(Vec2::splat(10.0)), Some(Action::Back));
    }

    #[test]
    fn test_keyboard_layout() {
        let session = Session::new();
        let layout = Layout::for_screen(Screen::EnterName, &ctx(&session, &[]));
        let a = center_of(&layout, Action::Type('A'));
        assert!((a.x - SCREEN_WIDTH / 9.0).abs() < 1e-3);
        assert!((a.y - 2.0 * SCREEN_HEIGHT / 6.0).abs() < 1e-3);
        let z = center_of(&layout, Action::Type('Z'));
        assert!((z.y - 5.0 * SCREEN_HEIGHT / 6.0).abs() < 1e-3);

        let back = layout.rect_of(Action::Backspace).unwrap();
        let c = layout.rect_of(Action::Type('C')).unwrap();
        assert_eq!(back.left(), c.left());
        assert_eq!(layout.hit_test(back.center()), Some(Action::Backspace));
        let done = layout.rect_of(Action::Done).unwrap();
        assert_eq!(layout.hit_test(done.center()), Some(Action::Done));
        assert!(!done.intersects(&back));
    }

    #[test]
    fn test_selection_arrow_follows_choice() {
        let mut session = Session::new();
        session.ammo_color = AmmoColor::Yellow;
        let layout = Layout::for_screen(
            Screen::Settings(SettingsPage::BulletSelect),
            &ctx(&session, &[]),
        );
        let arrow = layout
            .items()
            .iter()
            .find(|i| i.visual == Visual::SelectionArrow)
            .unwrap();
        let sample = layout.rect_of(Action::SelectAmmo(AmmoColor::Yellow)).unwrap();
        assert!((arrow.rect.center().x - sample.center().x).abs() < 1e-3);
        assert!(arrow.rect.bottom() < sample.top());
    }

    #[test]
    fn test_hover_highlights_interactive_text_only() {
        let session = Session::new();
        let layout = Layout::for_screen(Screen::GameOver, &ctx(&session, &[]));
        let title = layout.items()[0].rect.center();
        let items = layout.render_items(title);
        assert!(items.iter().all(|i| !matches!(
            i.visual,
            Visual::Text {
                highlighted: true,
                ..
            }
        )));

        let restart = center_of(&layout, Action::Restart);
        let items = layout.render_items(restart);
        let lit: Vec<&RenderItem> = items
            .iter()
            .filter(|i| {
                matches!(
                    i.visual,
                    Visual::Text {
                        highlighted: true,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].visual, Visual::Text {
            text: "RESTART".into(),
            highlighted: true
        });
    }

    #[test]
    fn test_highscore_rows() {
        let session = Session::new();
        let ledger = vec![
            HighScoreEntry {
                name: "ACE".into(),
                score: 40,
            },
            HighScoreEntry::default(),
        ];
        let layout = Layout::for_screen(Screen::HighscoreList, &ctx(&session, &ledger));
        // BACK, heading, then score/name pairs
        assert_eq!(layout.items().len(), 2 + 2 * ledger.len());
        assert_eq!(layout.items()[2].visual, Visual::text("40"));
        assert_eq!(layout.items()[3].visual, Visual::text("ACE"));
        assert_eq!(layout.hit_test(Vec2::new(20.0, 20.0)), Some(Action::Back));
    }
}
