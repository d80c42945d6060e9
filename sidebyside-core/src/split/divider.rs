//! Draggable divider between the detail and master panes
//!
//! The divider tracks a single offset measured from the start edge of the
//! container. The offset always stays inside `[min_offset, max_offset]`,
//! where `max_offset` follows the container width as `width - min_offset`.
//!
//! Offset changes are published on a `tokio::sync::watch` channel so that
//! observers outside the host can follow the divider without polling.

use tokio::sync::watch;

/// Default minimum offset (and minimum master width) in pixels.
pub const DEFAULT_MIN_OFFSET: u32 = 220;

/// Divider state for a horizontal split.
#[derive(Debug)]
pub struct Divider {
    offset: u32,
    min_offset: u32,
    max_offset: u32,
    total_length: u32,
    notifier: watch::Sender<u32>,
}

impl Divider {
    /// Creates a divider with the given minimum offset and no container yet.
    ///
    /// Until [`Divider::initialize`] or [`Divider::set_total_length`] is
    /// called the divider sits at `min_offset` with a collapsed range.
    #[must_use]
    pub fn new(min_offset: u32) -> Self {
        let (notifier, _) = watch::channel(min_offset);
        Self {
            offset: min_offset,
            min_offset,
            max_offset: min_offset,
            total_length: 0,
            notifier,
        }
    }

    /// Sets the container length and the starting offset.
    ///
    /// The initial offset is clamped into the new bounds. Returns `true` if
    /// the offset moved.
    pub fn initialize(&mut self, container_length: u32, initial_offset: u32) -> bool {
        self.total_length = container_length;
        self.max_offset = max_offset_for(container_length, self.min_offset);
        self.apply(initial_offset)
    }

    /// Updates the container length and re-clamps the offset.
    ///
    /// Returns `true` and notifies subscribers if the offset changed.
    pub fn set_total_length(&mut self, length: u32) -> bool {
        self.total_length = length;
        self.max_offset = max_offset_for(length, self.min_offset);
        self.apply(self.offset)
    }

    /// Moves the divider by a signed pointer delta.
    ///
    /// Dragging past a bound stops at the bound. Returns `true` and notifies
    /// subscribers if the clamped offset differs from the previous one.
    pub fn drag(&mut self, delta: i32) -> bool {
        let proposed = i64::from(self.offset) + i64::from(delta);
        let clamped = proposed.clamp(i64::from(self.min_offset), i64::from(self.max_offset));
        // clamped lies within two u32 bounds
        self.apply(u32::try_from(clamped).unwrap_or(self.max_offset))
    }

    /// Moves the divider to the centre of the container.
    pub fn reset(&mut self) -> bool {
        self.apply(self.total_length / 2)
    }

    /// Returns the current offset from the start edge.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the lower bound of the offset.
    #[must_use]
    pub const fn min_offset(&self) -> u32 {
        self.min_offset
    }

    /// Returns the upper bound of the offset.
    #[must_use]
    pub const fn max_offset(&self) -> u32 {
        self.max_offset
    }

    /// Returns the container length the bounds were computed from.
    #[must_use]
    pub const fn total_length(&self) -> u32 {
        self.total_length
    }

    /// Returns a receiver that observes every offset change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.notifier.subscribe()
    }

    fn apply(&mut self, proposed: u32) -> bool {
        let next = proposed.clamp(self.min_offset, self.max_offset);
        if next == self.offset {
            return false;
        }
        tracing::trace!(from = self.offset, to = next, "Divider offset changed");
        self.offset = next;
        self.notifier.send_replace(next);
        true
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_OFFSET)
    }
}

/// Upper bound for a container of `length`, never below `min_offset`.
const fn max_offset_for(length: u32, min_offset: u32) -> u32 {
    let max = length.saturating_sub(min_offset);
    if max < min_offset { min_offset } else { max }
}
