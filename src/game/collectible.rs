//! Food items
//!
//! Items drift left at a constant speed. Leaving the screen and being eaten
//! are handled the same way: the item goes back to the right edge at a new
//! random height.

use rand::Rng;
use crate::assets::Assets;
use super::constants::{ITEM_MAX_Y, ITEM_SIZE, ITEM_STEP, SCREEN_WIDTH};
use super::entity::{Entity, TickContext};
use super::Rect;

#[derive(Debug, Clone)]
pub struct Collectible {
    /// Always in [-ITEM_SIZE, SCREEN_WIDTH]
    x: f32,
    y: f32,
}

impl Collectible {
    /// New item at the right edge with a random height
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: SCREEN_WIDTH,
            y: random_y(rng),
        }
    }

    #[cfg(test)]
    pub(crate) fn at(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move one step left, wrapping once fully off the left edge
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x -= ITEM_STEP;
        if self.x <= -ITEM_SIZE {
            self.respawn(rng);
        }
    }

    /// Eaten by the avatar: same as wrapping around
    pub fn collect<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.respawn(rng);
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x = SCREEN_WIDTH;
        self.y = random_y(rng);
    }
}

fn random_y<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0..=ITEM_MAX_Y) as f32
}

impl Entity for Collectible {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.x, self.y, ITEM_SIZE, ITEM_SIZE))
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.step(&mut *ctx.rng);
    }

    fn draw(&self, assets: &Assets) {
        let (x, y) = self.position();
        assets.food.draw(x, y);
    }
}
