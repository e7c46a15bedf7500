//! Gameplay constants
//!
//! All values are in screen pixels and ticks. Physics is not scaled by frame
//! time, so these only hold their intended feel at the 60 Hz tick rate.

/// Logical screen size (also the window size)
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 450.0;

// Background
pub const BACKGROUND_SCROLL_STEP: f32 = 1.0;
/// The background image is scaled to this size before cropping
pub const BACKGROUND_SCALED_HEIGHT: f32 = 600.0;
/// Rows cut from the top of the scaled background image
pub const BACKGROUND_CROP_TOP: f32 = 100.0;

// Avatar
pub const AVATAR_X: f32 = 40.0;
pub const AVATAR_SIZE: f32 = 75.0;
pub const AVATAR_INTRO_SIZE: f32 = 250.0;
pub const AVATAR_FRAME_COUNT: usize = 5;
pub const AVATAR_TICKS_PER_FRAME: usize = 10;
/// Added to vertical velocity every tick
pub const GRAVITY: f32 = 1.0 / 6.0;
/// Subtracted from vertical velocity on every jump
pub const JUMP_IMPULSE: f32 = 20.0 / 4.0;
/// Avatar y at or past this line counts as hitting the ground
pub const GROUND_THRESHOLD: f32 = 400.0;

// Collectibles
pub const ITEM_SIZE: f32 = 25.0;
pub const ITEM_COUNT: usize = 5;
pub const ITEM_STEP: f32 = 1.0;
/// Keeps respawned items above the bottom edge
pub const GROUND_MARGIN: i32 = 25;
/// Largest y a respawned item can get (inclusive)
pub const ITEM_MAX_Y: i32 = SCREEN_HEIGHT as i32 - GROUND_MARGIN;

// Time bar
pub const MAX_HEALTH: f32 = 100.0;
/// Health lost per active tick (one point per second at 60 Hz)
pub const HEALTH_DRAIN: f32 = 1.0 / 60.0;
pub const HEALTH_BAR_WIDTH: f32 = 200.0;
pub const HEALTH_BAR_HEIGHT: f32 = 20.0;
pub const HEALTH_BAR_Y: f32 = 10.0;
