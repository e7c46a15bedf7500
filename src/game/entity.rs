//! Entity trait
//!
//! Everything on screen moves once per active tick and knows how to draw
//! itself from the loaded assets. Entities never look at each other: the
//! world compares their bounds for collisions.

use rand::rngs::StdRng;
use crate::assets::Assets;
use super::Rect;

/// Per-tick resources handed to entities while updating
pub struct TickContext<'a> {
    /// Random source for respawn positions
    pub rng: &'a mut StdRng,
}

pub trait Entity {
    /// Top-left corner in screen pixels
    fn position(&self) -> (f32, f32);

    /// Collision bounds, if the entity takes part in collisions
    fn bounds(&self) -> Option<Rect> {
        None
    }

    /// Advance one tick
    fn update(&mut self, ctx: &mut TickContext<'_>);

    /// Draw at the current position
    fn draw(&self, assets: &Assets);
}
