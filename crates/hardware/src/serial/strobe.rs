//! Registered strobe sampler.
//!
//! The serial strobe is asynchronous to the unit clock, so each stage keeps
//! the previous tick's sample and compares it with the current one. RX acts
//! on rising edges and TX on falling edges.

/// Previous-sample edge detector for one strobe line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    prev: bool,
}

impl EdgeDetector {
    /// Creates a detector whose previous sample is low.
    pub const fn new() -> Self {
        Self { prev: false }
    }

    /// True if `now` is high and the previous sample was low.
    #[inline]
    pub const fn rising(&self, now: bool) -> bool {
        now && !self.prev
    }

    /// True if `now` is low and the previous sample was high.
    #[inline]
    pub const fn falling(&self, now: bool) -> bool {
        !now && self.prev
    }

    /// Registers `now` as the previous sample for the next tick.
    #[inline]
    pub const fn sample(&mut self, now: bool) {
        self.prev = now;
    }

    /// The registered previous sample.
    pub const fn previous(&self) -> bool {
        self.prev
    }

    /// Returns the detector to its reset state.
    pub const fn reset(&mut self) {
        self.prev = false;
    }
}
