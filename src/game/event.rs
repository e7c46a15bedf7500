//! Event System
//!
//! Two directions of events cross the world boundary each tick:
//! input events flow in (collected by the input poller), game events flow
//! out (drained by the main loop, which logs them).

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A discrete player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap (and start the game from the title screen)
    Jump,
    /// Quit key or window close
    Quit,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    HitGround,
    OutOfTime,
}

impl GameOverReason {
    pub fn label(&self) -> &'static str {
        match self {
            GameOverReason::HitGround => "hit the ground",
            GameOverReason::OutOfTime => "ran out of time",
        }
    }
}

/// Something that happened inside the world this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Title screen left, a new run begins
    Started,
    /// An item was eaten; `score` is the total after it
    ItemCollected { score: u32 },
    /// Run over, back to the title screen
    GameOver { reason: GameOverReason, score: u32 },
    /// Quit requested
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }
}
