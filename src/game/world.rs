//! World
//!
//! Single owner of all game state: the two-screen state machine, score,
//! time bar, every entity and the random source. The main loop feeds it
//! input, ticks it once per frame and hands it to the renderer.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::avatar::Avatar;
use super::background::Background;
use super::collectible::Collectible;
use super::constants::{GROUND_THRESHOLD, HEALTH_DRAIN, ITEM_COUNT, MAX_HEALTH};
use super::entity::{Entity, TickContext};
use super::event::{EventQueue, GameEvent, GameOverReason, InputEvent};

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen, nothing moves
    #[default]
    Intro,
    /// Playing
    Active,
}

pub struct World {
    state: GameState,
    /// Screen the last tick ran on; stays Active for the tick that ends a run
    screen: GameState,
    /// Remaining time, in [0, MAX_HEALTH]
    health: f32,
    score: u32,
    running: bool,

    background: Background,
    avatar: Avatar,
    collectibles: Vec<Collectible>,

    rng: StdRng,
    events: EventQueue<GameEvent>,
}

impl World {
    /// Fresh world on the title screen. `seed` drives item placement.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let collectibles = (0..ITEM_COUNT).map(|_| Collectible::spawn(&mut rng)).collect();
        Self {
            state: GameState::Intro,
            screen: GameState::Intro,
            health: MAX_HEALTH,
            score: 0,
            running: true,
            background: Background::new(),
            avatar: Avatar::new(),
            collectibles,
            rng,
            events: EventQueue::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Screen to draw for the current frame
    pub fn screen(&self) -> GameState {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn health(&self) -> f32 {
        self.health
    }

    /// Remaining time as a fraction of the full bar
    pub fn health_fraction(&self) -> f32 {
        (self.health / MAX_HEALTH).clamp(0.0, 1.0)
    }

    /// False once quit has been requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    /// Take everything that happened since the last drain
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    /// Apply this frame's inputs in arrival order
    pub fn handle_inputs(&mut self, inputs: impl IntoIterator<Item = InputEvent>) {
        for input in inputs {
            self.handle_input(input);
        }
    }

    pub fn handle_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::Jump => {
                if self.state == GameState::Intro {
                    self.start();
                }
                // The press that starts a run is also its first flap
                self.avatar.apply_impulse();
            }
            InputEvent::Quit => {
                if self.running {
                    self.running = false;
                    self.events.send(GameEvent::Quit);
                }
            }
        }
    }

    fn start(&mut self) {
        self.state = GameState::Active;
        self.health = MAX_HEALTH;
        self.score = 0;
        self.avatar.reset();
        self.events.send(GameEvent::Started);
    }

    /// Advance one tick. Nothing moves on the title screen.
    pub fn tick(&mut self) {
        self.screen = self.state;
        if self.state != GameState::Active {
            return;
        }

        let mut ctx = TickContext { rng: &mut self.rng };
        self.background.update(&mut ctx);
        self.avatar.update(&mut ctx);

        let avatar_bounds = self.avatar.bounds();
        for item in &mut self.collectibles {
            item.update(&mut ctx);
            let hit = match (avatar_bounds, item.bounds()) {
                (Some(a), Some(b)) => a.intersects(&b),
                _ => false,
            };
            if hit {
                self.score += 1;
                item.collect(&mut *ctx.rng);
                self.events.send(GameEvent::ItemCollected { score: self.score });
            }
        }

        self.health = (self.health - HEALTH_DRAIN).max(0.0);

        if let Some(reason) = self.end_condition() {
            self.state = GameState::Intro;
            self.events.send(GameEvent::GameOver { reason, score: self.score });
        }
    }

    /// Ground is checked before the time bar
    fn end_condition(&self) -> Option<GameOverReason> {
        if self.avatar.y() >= GROUND_THRESHOLD {
            Some(GameOverReason::HitGround)
        } else if self.health <= 0.0 {
            Some(GameOverReason::OutOfTime)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    #[cfg(test)]
    pub(crate) fn set_collectibles(&mut self, items: Vec<Collectible>) {
        self.collectibles = items;
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: f32) {
        self.health = health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::{AVATAR_X, ITEM_SIZE, SCREEN_WIDTH};

    fn active_world() -> World {
        let mut world = World::new(7);
        world.handle_input(InputEvent::Jump);
        world.drain_events().for_each(drop);
        world
    }

    #[test]
    fn test_starts_on_title_screen() {
        let mut world = World::new(1);
        assert_eq!(world.state(), GameState::Intro);
        assert_eq!(world.collectibles().len(), ITEM_COUNT);

        let before: Vec<f32> = world.collectibles().iter().map(|c| c.x()).collect();
        world.tick();
        let after: Vec<f32> = world.collectibles().iter().map(|c| c.x()).collect();
        assert_eq!(before, after);
        assert_eq!(world.background().offset(), 0.0);
        assert_eq!(world.health(), MAX_HEALTH);
    }

    #[test]
    fn test_jump_starts_run() {
        let mut world = World::new(1);
        world.avatar_mut().set_motion(300.0, 4.0);
        world.set_health(3.0);

        world.handle_input(InputEvent::Jump);

        assert_eq!(world.state(), GameState::Active);
        assert_eq!(world.score(), 0);
        assert_eq!(world.health(), MAX_HEALTH);
        assert_eq!(world.avatar().y(), 0.0);
        assert!(world.avatar().velocity() < 0.0);
        assert_eq!(world.drain_events().collect::<Vec<_>>(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_jump_while_active_only_flaps() {
        let mut world = active_world();
        world.tick();
        let velocity = world.avatar().velocity();
        world.handle_input(InputEvent::Jump);
        assert_eq!(world.state(), GameState::Active);
        assert!(world.avatar().velocity() < velocity);
        assert!(world.drain_events().next().is_none());
    }

    #[test]
    fn test_health_drains_per_tick() {
        let mut world = active_world();
        world.set_collectibles(Vec::new());
        for _ in 0..60 {
            world.avatar_mut().set_motion(100.0, 0.0);
            world.tick();
        }
        assert!((world.health() - (MAX_HEALTH - 1.0)).abs() < 1e-3);
        assert!((world.health_fraction() - 0.99).abs() < 1e-4);
    }

    #[test]
    fn test_empty_time_bar_ends_run() {
        let mut world = active_world();
        world.set_collectibles(Vec::new());
        world.avatar_mut().set_motion(100.0, -1.0);
        world.set_health(0.0);

        world.tick();

        assert_eq!(world.state(), GameState::Intro);
        assert_eq!(
            world.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::GameOver { reason: GameOverReason::OutOfTime, score: 0 }]
        );
    }

    #[test]
    fn test_hitting_ground_ends_run() {
        let mut world = active_world();
        world.set_collectibles(Vec::new());
        world.avatar_mut().set_motion(399.0, 1.0);

        world.tick();

        assert_eq!(world.state(), GameState::Intro);
        assert_eq!(
            world.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::GameOver { reason: GameOverReason::HitGround, score: 0 }]
        );
    }

    #[test]
    fn test_final_tick_still_shows_play_screen() {
        let mut world = active_world();
        world.set_collectibles(Vec::new());
        world.avatar_mut().set_motion(399.0, 1.0);

        world.tick();
        assert_eq!(world.state(), GameState::Intro);
        assert_eq!(world.screen(), GameState::Active);
        assert!(world.avatar().y() >= GROUND_THRESHOLD);

        world.tick();
        assert_eq!(world.screen(), GameState::Intro);
    }

    #[test]
    fn test_starting_tick_shows_play_screen() {
        let mut world = World::new(2);
        world.tick();
        assert_eq!(world.screen(), GameState::Intro);

        world.handle_input(InputEvent::Jump);
        world.tick();
        assert_eq!(world.screen(), GameState::Active);
    }

    #[test]
    fn test_ground_wins_over_time() {
        let mut world = active_world();
        world.set_collectibles(Vec::new());
        world.avatar_mut().set_motion(399.0, 1.0);
        world.set_health(HEALTH_DRAIN / 2.0);

        world.tick();

        let events: Vec<_> = world.drain_events().collect();
        assert_eq!(
            events,
            vec![GameEvent::GameOver { reason: GameOverReason::HitGround, score: 0 }]
        );
    }

    #[test]
    fn test_score_kept_until_next_run() {
        let mut world = active_world();
        world.set_collectibles(vec![Collectible::at(AVATAR_X + 2.0, 200.0)]);
        world.avatar_mut().set_motion(190.0, 0.0);
        world.tick();
        assert_eq!(world.score(), 1);

        world.avatar_mut().set_motion(399.0, 5.0);
        world.tick();
        assert_eq!(world.state(), GameState::Intro);
        assert_eq!(world.score(), 1);

        world.handle_input(InputEvent::Jump);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_two_overlaps_score_two() {
        let mut world = active_world();
        // Avatar will sit at y = 100 + GRAVITY after its update
        world.avatar_mut().set_motion(100.0, 0.0);
        world.set_collectibles(vec![
            Collectible::at(61.0, 110.0),
            Collectible::at(101.0, 140.0),
            Collectible::at(401.0, 110.0),
            Collectible::at(601.0, 300.0),
            Collectible::at(SCREEN_WIDTH, 10.0),
        ]);

        world.tick();

        assert_eq!(world.score(), 2);
        let collected = world
            .drain_events()
            .filter(|e| matches!(e, GameEvent::ItemCollected { .. }))
            .count();
        assert_eq!(collected, 2);
        // Eaten items are back on the right edge
        assert_eq!(world.collectibles()[0].x(), SCREEN_WIDTH);
        assert_eq!(world.collectibles()[1].x(), SCREEN_WIDTH);
        assert_eq!(world.collectibles()[2].x(), 400.0);
    }

    #[test]
    fn test_items_stay_in_bounds_during_play() {
        let mut world = active_world();
        for _ in 0..2000 {
            if world.state() == GameState::Intro {
                world.handle_input(InputEvent::Jump);
            }
            if world.avatar().velocity() > 2.0 {
                world.handle_input(InputEvent::Jump);
            }
            world.tick();
            assert!(world.avatar().y() >= 0.0);
            for item in world.collectibles() {
                assert!(item.x() >= -ITEM_SIZE && item.x() <= SCREEN_WIDTH);
            }
        }
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut world = World::new(3);
        world.handle_inputs([InputEvent::Quit, InputEvent::Quit]);
        assert!(!world.is_running());
        assert_eq!(world.drain_events().collect::<Vec<_>>(), vec![GameEvent::Quit]);

        let mut world = active_world();
        world.handle_input(InputEvent::Quit);
        assert!(!world.is_running());
        assert_eq!(world.state(), GameState::Active);
    }
}
