//! Scrolling background starfield
//!
//! Purely cosmetic, but simulated here so the render list stays a plain
//! snapshot of state.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::STAR_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub rect: Rect,
    pub vel: Vec2,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(screen: Vec2, count: usize, rng: &mut impl Rng) -> Self {
        let width = screen.x.max(1.0) as i32;
        let height = screen.y.max(1.0) as i32;
        let stars = (0..count)
            .map(|_| {
                let x = rng.random_range(0..width) as f32;
                let y = rng.random_range(0..height) as f32;
                let vy = rng.random_range(-5..-1) as f32;
                Star {
                    rect: Rect::new(Vec2::new(x, y), Vec2::splat(STAR_SIZE)),
                    vel: Vec2::new(0.0, vy),
                }
            })
            .collect();
        Self { stars }
    }

    /// Drift upward; stars that clear the top re-enter at the bottom
    pub fn advance(&mut self, screen: Vec2) {
        for star in &mut self.stars {
            star.rect.pos += star.vel;
            if star.rect.bottom() < 0.0 {
                star.rect.pos.y = screen.y;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
