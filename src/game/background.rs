//! Scrolling sky
//!
//! Two copies of the same image are drawn side by side; shifting both left
//! and snapping back after a full screen width gives an endless scroll.

use crate::assets::Assets;
use super::constants::{BACKGROUND_SCROLL_STEP, SCREEN_WIDTH};
use super::entity::{Entity, TickContext};

#[derive(Debug, Clone, Default)]
pub struct Background {
    /// Scroll offset, always in (-SCREEN_WIDTH, 0]
    x: f32,
}

impl Background {
    pub fn new() -> Self {
        Self { x: 0.0 }
    }

    pub fn offset(&self) -> f32 {
        self.x
    }

    /// Scroll one step left, wrapping after a full screen width
    pub fn move_left(&mut self) {
        self.x -= BACKGROUND_SCROLL_STEP;
        if self.x <= -SCREEN_WIDTH {
            self.x = 0.0;
        }
    }
}

impl Entity for Background {
    fn position(&self) -> (f32, f32) {
        (self.x, 0.0)
    }

    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        self.move_left();
    }

    fn draw(&self, assets: &Assets) {
        let (x, y) = self.position();
        assets.background.draw(x, y);
        assets.background.draw(x + SCREEN_WIDTH, y);
    }
}
