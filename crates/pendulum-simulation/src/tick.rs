//! Tick cadence
//!
//! A [`TickSource`] decides when and how often the simulation advances. The
//! window loop drives a [`SubstepTicks`] once per rendered frame; headless
//! runs and tests use [`FixedTicks`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

pub trait TickSource {
    /// Invoke `on_tick` at this source's cadence, passing a running tick
    /// index. Returns when the source is exhausted or the callback stops it.
    fn run(&mut self, on_tick: &mut dyn FnMut(u64) -> TickControl);
}

/// A fixed number of ticks, back to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTicks {
    pub count: u64,
}

impl FixedTicks {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl TickSource for FixedTicks {
    fn run(&mut self, on_tick: &mut dyn FnMut(u64) -> TickControl) {
        for tick in 0..self.count {
            if on_tick(tick) == TickControl::Stop {
                break;
            }
        }
    }
}

/// `per_frame` ticks each time it is run, counting ticks across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubstepTicks {
    per_frame: u32,
    elapsed: u64,
}

impl SubstepTicks {
    pub const MIN_PER_FRAME: u32 = 1;
    pub const MAX_PER_FRAME: u32 = 32;

    pub fn new(per_frame: u32) -> Self {
        Self {
            per_frame: per_frame.clamp(Self::MIN_PER_FRAME, Self::MAX_PER_FRAME),
            elapsed: 0,
        }
    }

    pub fn per_frame(&self) -> u32 {
        self.per_frame
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn faster(&mut self) {
        self.per_frame = (self.per_frame + 1).min(Self::MAX_PER_FRAME);
    }

    pub fn slower(&mut self) {
        self.per_frame = self.per_frame.saturating_sub(1).max(Self::MIN_PER_FRAME);
    }
}

impl TickSource for SubstepTicks {
    fn run(&mut self, on_tick: &mut dyn FnMut(u64) -> TickControl) {
        for _ in 0..self.per_frame {
            let tick = self.elapsed;
            self.elapsed += 1;
            if on_tick(tick) == TickControl::Stop {
                break;
            }
        }
    }
}
