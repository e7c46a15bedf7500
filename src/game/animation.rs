//! Sprite animation

/// Restartable cyclic frame sequence.
///
/// Each of `frame_count` frames is held for `ticks_per_frame` ticks, then the
/// sequence loops back to the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    frame_count: usize,
    ticks_per_frame: usize,
    tick: usize,
}

impl FrameCycle {
    pub fn new(frame_count: usize, ticks_per_frame: usize) -> Self {
        Self {
            frame_count: frame_count.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            tick: 0,
        }
    }

    /// Ticks in one full loop
    pub fn period(&self) -> usize {
        self.frame_count * self.ticks_per_frame
    }

    /// Step one tick forward and return the frame now showing
    pub fn advance(&mut self) -> usize {
        self.tick = (self.tick + 1) % self.period();
        self.current()
    }

    /// Frame index currently showing
    pub fn current(&self) -> usize {
        self.tick / self.ticks_per_frame
    }

    /// Go back to the first frame
    pub fn restart(&mut self) {
        self.tick = 0;
    }
}
