//! Screens and menus
//!
//! Exactly one [`Screen`] is active at a time. The settings area nests one
//! level of sub-pages, popped by the shared BACK action.

pub mod input;
pub mod menu;

pub use input::{InputEvent, Key, PointerButton};
pub use menu::{Action, Layout, MenuContext, MenuItem};

/// Pages within the settings area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsPage {
    /// Top-level settings list
    #[default]
    Menu,
    PlayerSelect,
    BulletSelect,
    CursorSelect,
    Upgrades,
}

/// Active game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Settings(SettingsPage),
    Playing {
        paused: bool,
    },
    GameOver,
    NewHighscore,
    EnterName,
    HighscoreList,
}

impl Screen {
    /// Where BACK leads: one settings level up, or the title screen.
    /// None on screens without a BACK item.
    pub fn back(self) -> Option<Screen> {
        match self {
            Screen::Settings(SettingsPage::Menu) | Screen::HighscoreList => Some(Screen::Title),
            Screen::Settings(_) => Some(Screen::Settings(SettingsPage::Menu)),
            _ => None,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Screen::Playing { .. })
    }

    pub fn is_paused(self) -> bool {
        matches!(self, Screen::Playing { paused: true })
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Title => "title",
            Screen::Settings(SettingsPage::Menu) => "settings",
            Screen::Settings(SettingsPage::PlayerSelect) => "player select",
            Screen::Settings(SettingsPage::BulletSelect) => "bullet select",
            Screen::Settings(SettingsPage::CursorSelect) => "cursor select",
            Screen::Settings(SettingsPage::Upgrades) => "upgrades",
            Screen::Playing { paused: false } => "playing",
            Screen::Playing { paused: true } => "paused",
            Screen::GameOver => "game over",
            Screen::NewHighscore => "new highscore",
            Screen::EnterName => "enter name",
            Screen::HighscoreList => "highscores",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_pops_one_level() {
        for page in [
            SettingsPage::PlayerSelect,
            SettingsPage::BulletSelect,
            SettingsPage::CursorSelect,
            SettingsPage::Upgrades,
        ] {
            assert_eq!(
                Screen::Settings(page).back(),
                Some(Screen::Settings(SettingsPage::Menu))
            );
        }
        assert_eq!(Screen::Settings(SettingsPage::Menu).back(), Some(Screen::Title));
        assert_eq!(Screen::HighscoreList.back(), Some(Screen::Title));
        assert_eq!(Screen::GameOver.back(), None);
    }
}
