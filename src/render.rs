//! Frame rendering
//!
//! Draws one complete frame for the world's current screen, then the score
//! overlay on top. Pure output: nothing here touches game state.

use macroquad::prelude::{clear_background, draw_rectangle, Color, BLACK};

use crate::assets::Assets;
use crate::game::constants::{
    HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH, HEALTH_BAR_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::game::{Entity, GameState, Rect, World};

const SKY_COLOR: Color = Color::new(94.0 / 255.0, 129.0 / 255.0, 162.0 / 255.0, 1.0);
const TITLE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const BAR_EMPTY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const BAR_FULL_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

const TITLE: &str = "Hungry Boya ";
const INSTRUCTIONS: &str = "(Press SPACE to fly, eat the food to survive!)";
const TIME_LABEL: &str = "Time:";
/// Gap between the "Time:" label and the bar
const LABEL_GAP: f32 = 10.0;

pub fn draw_frame(world: &World, assets: &Assets) {
    clear_background(SKY_COLOR);

    match world.screen() {
        GameState::Active => draw_active(world, assets),
        GameState::Intro => draw_intro(assets),
    }

    draw_score(world.score(), assets);
}

fn draw_active(world: &World, assets: &Assets) {
    world.background().draw(assets);
    world.avatar().draw(assets);
    for item in world.collectibles() {
        item.draw(assets);
    }
    draw_time_bar(world.health_fraction(), assets);
}

fn draw_intro(assets: &Assets) {
    let size = assets.bird_intro.size();
    let bird = Rect::centered_at(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5, size.x, size.y);
    assets.bird_intro.draw(bird.x, bird.y);

    assets.draw_text(TITLE, 275.0, 50.0, TITLE_COLOR, false);
    assets.draw_text(INSTRUCTIONS, 50.0, 100.0, BLACK, false);
}

/// Red track with a green fill proportional to the time left
fn draw_time_bar(fraction: f32, assets: &Assets) {
    let bar = time_bar_rect();

    let label_w = assets.text_width(TIME_LABEL, true);
    assets.draw_text(TIME_LABEL, bar.x - label_w - LABEL_GAP, bar.y, BLACK, true);

    draw_rectangle(bar.x, bar.y, bar.w, bar.h, BAR_EMPTY_COLOR);
    draw_rectangle(bar.x, bar.y, time_bar_fill(bar.w, fraction), bar.h, BAR_FULL_COLOR);
}

fn time_bar_rect() -> Rect {
    Rect::new(
        SCREEN_WIDTH * 0.5 - HEALTH_BAR_WIDTH * 0.5,
        HEALTH_BAR_Y,
        HEALTH_BAR_WIDTH,
        HEALTH_BAR_HEIGHT,
    )
}

fn time_bar_fill(width: f32, fraction: f32) -> f32 {
    width * fraction.clamp(0.0, 1.0)
}

fn draw_score(score: u32, assets: &Assets) {
    assets.draw_text(&score_text(score), 10.0, 10.0, BLACK, false);
}

fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}
