//! Keypad Service
//!
//! Scans a small set of navigation buttons on a fixed period, debounces every button with its own state
//! machine and routes the resulting gestures to a [`navigation_interface::Navigator`].
//!
//! ```ignore
//! let mut keypad: Keypad<_> = Keypad::build(KeypadConfig::default(), pins)?;
//! let ticks = scan::ticker(keypad.config());
//! Scanner::new(&mut keypad, Router::new(&mut ui), ticks).run().await
//! ```

#![no_std]
#![warn(missing_docs)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub mod button;
pub mod config;
pub mod debounce;
pub mod keypad;
pub mod router;
pub mod scan;

pub use button::{Button, ButtonId};
pub use config::{ActiveState, KeypadConfig, Timing};
pub use debounce::{Debouncer, Gesture, State};
pub use keypad::{Event, GestureHandler, Keypad, KEYPAD_SIZE};
pub use router::{Command, Router};
pub use scan::{Scanner, TickSource};

/// Keypad initialization errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// The scan period is zero
    InvalidScanPeriod,
    /// A threshold is shorter than one scan period, or too long to count in ticks
    InvalidThreshold,
    /// The pin could not be read
    PinUnavailable(ButtonId),
    /// The button is already registered
    DuplicateButton(ButtonId),
    /// The keypad has no room for another button
    RegistryFull(ButtonId),
}
