//! Single-slot handshake register shared by every stage boundary.
//!
//! A [`PipeReg`] models one hardware pipeline register with a valid bit:
//! 1. **Occupancy:** At most one item is in flight; `is_valid` reports it.
//! 2. **Persistence:** The data register keeps its contents after the item is
//!    consumed, exactly as a flip-flop bank would, but is only meaningful
//!    while valid.
//! 3. **Overrun Protection:** Loading an occupied slot that is not being
//!    consumed on the same tick is rejected without touching the slot.

use crate::common::{MauError, Result};

/// One-slot pipeline register with a valid flag.
#[derive(Clone, Debug, Default)]
pub struct PipeReg<T> {
    name: &'static str,
    data: T,
    valid: bool,
}

impl<T: Clone + Default> PipeReg<T> {
    /// Creates an empty register. `name` identifies the owning stage in errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            data: T::default(),
            valid: false,
        }
    }

    /// Whether the slot currently holds an item.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The held item, if any.
    #[inline]
    pub const fn peek(&self) -> Option<&T> {
        if self.valid { Some(&self.data) } else { None }
    }

    /// The raw data register, valid or not.
    #[inline]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Whether the held item transfers downstream this tick.
    #[inline]
    pub const fn fires(&self, downstream_ready: bool) -> bool {
        self.valid && downstream_ready
    }

    /// Whether a new item may be loaded this tick.
    #[inline]
    pub const fn can_accept(&self, downstream_ready: bool) -> bool {
        !self.valid || downstream_ready
    }

    /// Applies one clock edge.
    ///
    /// If the occupant fires it is returned. If `incoming` is present it is
    /// loaded and the slot stays (or becomes) valid; otherwise a fired slot
    /// becomes empty.
    ///
    /// # Errors
    ///
    /// Returns [`MauError::SlotOverrun`] if `incoming` is present while the
    /// slot is occupied and not being consumed. The slot is left unchanged.
    pub fn commit(&mut self, downstream_ready: bool, incoming: Option<T>) -> Result<Option<T>> {
        if incoming.is_some() && !self.can_accept(downstream_ready) {
            return Err(MauError::SlotOverrun { stage: self.name });
        }

        let consumed = self.fires(downstream_ready).then(|| self.data.clone());
        match incoming {
            Some(item) => {
                self.data = item;
                self.valid = true;
            }
            None if consumed.is_some() => self.valid = false,
            None => {}
        }
        Ok(consumed)
    }

    /// Empties the slot and zeroes the data register.
    pub fn clear(&mut self) {
        self.data = T::default();
        self.valid = false;
    }
}
