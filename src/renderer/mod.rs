//! Render handoff
//!
//! The core never draws. Each tick it hands the host an ordered list of
//! boxes tagged with what belongs in them; later items paint over earlier
//! ones.

pub mod scene;

use serde::Serialize;

use crate::session::{AmmoColor, CursorSkin, PlayerSkin};
use crate::sim::{PickupKind, Rect};

pub use scene::build_scene;

/// Ammo counter colour band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AmmoGauge {
    /// 50 or more rounds
    Plenty,
    /// 26 to 49 rounds
    Low,
    /// 25 or fewer
    Critical,
}

impl AmmoGauge {
    pub fn for_ammo(ammo: u32) -> Self {
        match ammo {
            50.. => AmmoGauge::Plenty,
            26..=49 => AmmoGauge::Low,
            _ => AmmoGauge::Critical,
        }
    }
}

/// What to draw inside a render box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Visual {
    /// Menu or HUD text; `highlighted` when the pointer hovers an interactive item
    Text { text: String, highlighted: bool },
    TitleBanner,
    Coin,
    Heart,
    SelectionArrow,
    PlayerPortrait(PlayerSkin),
    AmmoSample(AmmoColor),
    CursorSample(CursorSkin),
    Star,
    Player { skin: PlayerSkin, heading: f32 },
    Bullet(AmmoColor),
    Alien { lives: u32, frozen: bool },
    Pickup(PickupKind),
    Explosion { phase: u32 },
    AmmoCounter { ammo: u32, gauge: AmmoGauge },
    Cursor(CursorSkin),
}

impl Visual {
    pub fn text(text: impl Into<String>) -> Self {
        Visual::Text {
            text: text.into(),
            highlighted: false,
        }
    }
}

/// One visible entity for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub rect: Rect,
    pub visual: Visual,
}

impl RenderItem {
    pub fn new(rect: Rect, visual: Visual) -> Self {
        Self { rect, visual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_gauge_bands() {
        assert_eq!(AmmoGauge::for_ammo(100), AmmoGauge::Plenty);
        assert_eq!(AmmoGauge::for_ammo(50), AmmoGauge::Plenty);
        assert_eq!(AmmoGauge::for_ammo(49), AmmoGauge::Low);
        assert_eq!(AmmoGauge::for_ammo(26), AmmoGauge::Low);
        assert_eq!(AmmoGauge::for_ammo(25), AmmoGauge::Critical);
        assert_eq!(AmmoGauge::for_ammo(0), AmmoGauge::Critical);
    }
}
