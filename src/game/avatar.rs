//! Player bird
//!
//! Falls under constant gravity and flaps upward on every jump input.
//! There is no grounded check: presses while airborne stack.

use crate::assets::Assets;
use super::animation::FrameCycle;
use super::constants::{
    AVATAR_FRAME_COUNT, AVATAR_SIZE, AVATAR_TICKS_PER_FRAME, AVATAR_X, GRAVITY, JUMP_IMPULSE,
};
use super::entity::{Entity, TickContext};
use super::Rect;

#[derive(Debug, Clone)]
pub struct Avatar {
    x: f32,
    /// Top edge, never above 0
    y: f32,
    /// Vertical velocity in pixels per tick (positive is down)
    velocity: f32,
    animation: FrameCycle,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            x: AVATAR_X,
            y: 0.0,
            velocity: 0.0,
            animation: FrameCycle::new(AVATAR_FRAME_COUNT, AVATAR_TICKS_PER_FRAME),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Index into the flight animation frames
    pub fn frame(&self) -> usize {
        self.animation.current()
    }

    /// Animate, apply gravity, integrate, clamp to the top of the screen
    pub fn step(&mut self) {
        self.animation.advance();
        self.velocity += GRAVITY;
        self.y += self.velocity;
        // Clamp position only, velocity is left untouched
        if self.y < 0.0 {
            self.y = 0.0;
        }
    }

    pub fn apply_impulse(&mut self) {
        self.velocity -= JUMP_IMPULSE;
    }

    /// Back to the top of the screen, at rest, first animation frame
    pub fn reset(&mut self) {
        self.y = 0.0;
        self.velocity = 0.0;
        self.animation.restart();
    }

    #[cfg(test)]
    pub(crate) fn set_motion(&mut self, y: f32, velocity: f32) {
        self.y = y;
        self.velocity = velocity;
    }
}

impl Entity for Avatar {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.x, self.y, AVATAR_SIZE, AVATAR_SIZE))
    }

    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        self.step();
    }

    fn draw(&self, assets: &Assets) {
        if let Some(sprite) = assets.bird_frames.get(self.frame()) {
            let (x, y) = self.position();
            sprite.draw(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates() {
        let mut avatar = Avatar::new();
        avatar.step();
        avatar.step();
        assert!((avatar.velocity() - 2.0 * GRAVITY).abs() < 1e-6);
        assert!((avatar.y() - 3.0 * GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_never_rises_above_top() {
        let mut avatar = Avatar::new();
        for i in 0..300 {
            if i % 3 == 0 {
                avatar.apply_impulse();
            }
            avatar.step();
            assert!(avatar.y() >= 0.0);
        }
    }

    #[test]
    fn test_impulses_stack() {
        let mut avatar = Avatar::new();
        avatar.apply_impulse();
        avatar.apply_impulse();
        assert!((avatar.velocity() + 2.0 * JUMP_IMPULSE).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut avatar = Avatar::new();
        for _ in 0..37 {
            avatar.step();
        }
        assert_ne!(avatar.frame(), 0);
        avatar.reset();
        assert_eq!(avatar.y(), 0.0);
        assert_eq!(avatar.velocity(), 0.0);
        assert_eq!(avatar.frame(), 0);
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut avatar = Avatar::new();
        avatar.set_motion(120.0, 0.0);
        assert_eq!(avatar.bounds(), Some(Rect::new(AVATAR_X, 120.0, AVATAR_SIZE, AVATAR_SIZE)));
    }
}
