//! Navigation Interface Definitions
//!
//! The contract between input services and whichever UI view is currently active.
//! Implementors own the "current view" indirection; callers only ever see a [`Navigator`].

#![no_std]
#![warn(missing_docs)]

/// Direction of a key navigation event
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Move the selection up
    Up,
    /// Move the selection down
    Down,
    /// Move the selection left
    Left,
    /// Move the selection right
    Right,
    /// Activate the current selection
    Enter,
}

/// Receiver of navigation commands.
///
/// Both calls are made synchronously from the input scan context and may arrive several times in quick
/// succession, e.g. three `on_key_event(Direction::Up)` for a long push on the up key.
pub trait Navigator {
    /// Deliver a key event to the active view
    fn on_key_event(&mut self, direction: Direction);

    /// Leave the active view, returning to its parent
    fn go_back(&mut self);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn on_key_event(&mut self, direction: Direction) {
        (**self).on_key_event(direction);
    }

    fn go_back(&mut self) {
        (**self).go_back();
    }
}
