//! Count-up animation for the statistics strip.

/// Total animation length.
pub const DURATION_MS: f64 = 2000.0;

/// Assumed frame interval (one animation frame at 60 Hz).
pub const FRAME_MS: f64 = 16.0;

/// One animation frame's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value; request another frame.
    Running(u64),
    /// Final value; the animation is over.
    Done(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

/// Linear count from zero to `target` in fixed per-frame increments.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / (DURATION_MS / FRAME_MS),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Advances one frame.
    pub fn next_frame(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            CounterFrame::Done(self.target)
        }
    }
}
