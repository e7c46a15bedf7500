//! Game Module
//!
//! Everything that happens inside the play field, kept free of windowing
//! and input polling so it can be driven tick by tick from tests.
//!
//! Key concepts:
//! - Entity: anything that moves each tick and draws itself
//! - World: owns the entities and the Intro/Active state machine
//! - Event: inputs going in, game events coming out

pub mod animation;
pub mod avatar;
pub mod background;
pub mod collectible;
pub mod constants;
pub mod entity;
pub mod event;
pub mod rect;
pub mod world;

// Re-export main types
pub use entity::Entity;
pub use event::{GameEvent, GameOverReason, InputEvent};
pub use rect::Rect;
pub use world::{GameState, World};
