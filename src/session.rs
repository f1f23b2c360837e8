//! Session and economy state
//!
//! Score, coins, permanent upgrades, cosmetic selections and the global
//! freeze countdown. Coins and upgrades survive run resets; score and
//! freeze do not.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player ship skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayerSkin {
    #[default]
    Original,
    Blue,
    Yellow,
}

impl PlayerSkin {
    /// Display order on the player select screen
    pub const ALL: [PlayerSkin; 3] = [PlayerSkin::Blue, PlayerSkin::Original, PlayerSkin::Yellow];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerSkin::Original => "original",
            PlayerSkin::Blue => "blue",
            PlayerSkin::Yellow => "yellow",
        }
    }
}

/// Bullet sprite colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AmmoColor {
    #[default]
    Green,
    Red,
    Purple,
    Yellow,
    Blue,
}

impl AmmoColor {
    pub const ALL: [AmmoColor; 5] = [
        AmmoColor::Green,
        AmmoColor::Red,
        AmmoColor::Purple,
        AmmoColor::Yellow,
        AmmoColor::Blue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AmmoColor::Green => "green",
            AmmoColor::Red => "red",
            AmmoColor::Purple => "purple",
            AmmoColor::Yellow => "yellow",
            AmmoColor::Blue => "blue",
        }
    }
}

/// Pointer sprite colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorSkin {
    #[default]
    Red,
    Blue,
    Green,
    Purple,
    Yellow,
}

impl CursorSkin {
    pub const ALL: [CursorSkin; 5] = [
        CursorSkin::Red,
        CursorSkin::Blue,
        CursorSkin::Green,
        CursorSkin::Purple,
        CursorSkin::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CursorSkin::Red => "red",
            CursorSkin::Blue => "blue",
            CursorSkin::Green => "green",
            CursorSkin::Purple => "purple",
            CursorSkin::Yellow => "yellow",
        }
    }
}

/// Purchasable permanent upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    Speed,
    Lives,
    Ammo,
}

impl Upgrade {
    pub const ALL: [Upgrade; 3] = [Upgrade::Speed, Upgrade::Lives, Upgrade::Ammo];

    pub fn cost(&self) -> u32 {
        match self {
            Upgrade::Speed => SPEED_UPGRADE_COST,
            Upgrade::Lives => LIFE_UPGRADE_COST,
            Upgrade::Ammo => AMMO_UPGRADE_COST,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Upgrade::Speed => "MOAR SPEED 10",
            Upgrade::Lives => "MOAR LIFE 20",
            Upgrade::Ammo => "MOAR AMMO 30",
        }
    }
}

/// Purchase counts per upgrade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrades {
    pub speed: u32,
    pub lives: u32,
    pub ammo: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Aliens killed this run
    pub score: u32,
    /// Coin balance (persists across runs)
    pub coins: u32,
    pub upgrades: Upgrades,
    pub ammo_color: AmmoColor,
    pub player_skin: PlayerSkin,
    pub cursor_skin: CursorSkin,
    /// Ticks of global freeze remaining (0 = inactive)
    pub freeze_ticks: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_speed(&self) -> f32 {
        PLAYER_BASE_SPEED + self.upgrades.speed as f32
    }

    pub fn starting_lives(&self) -> u32 {
        PLAYER_BASE_LIVES + self.upgrades.lives
    }

    pub fn starting_ammo(&self) -> u32 {
        PLAYER_BASE_AMMO + AMMO_UPGRADE_AMOUNT * self.upgrades.ammo
    }

    /// Buy an upgrade if the balance covers it. Returns whether it went through.
    pub fn purchase(&mut self, upgrade: Upgrade) -> bool {
        let cost = upgrade.cost();
        if self.coins < cost {
            log::debug!("Upgrade {:?} rejected: {} coins < {}", upgrade, self.coins, cost);
            return false;
        }
        self.coins -= cost;
        match upgrade {
            Upgrade::Speed => self.upgrades.speed += 1,
            Upgrade::Lives => self.upgrades.lives += 1,
            Upgrade::Ammo => self.upgrades.ammo += 1,
        }
        log::info!("Purchased {:?}, {} coins left", upgrade, self.coins);
        true
    }

    pub fn freeze_active(&self) -> bool {
        self.freeze_ticks > 0
    }

    /// Start a global freeze, or refresh a running one back to full length
    pub fn start_freeze(&mut self) {
        self.freeze_ticks = FREEZE_TICKS;
    }

    /// Count the freeze down one tick. Returns true on the tick it expires.
    pub fn advance_freeze(&mut self) -> bool {
        if self.freeze_ticks == 0 {
            return false;
        }
        self.freeze_ticks -= 1;
        self.freeze_ticks == 0
    }

    /// Clear per-run state; coins, upgrades and skins are kept
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.freeze_ticks = 0;
    }
}
