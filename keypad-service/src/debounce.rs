//! Debounce Module
//!
//! A per-button state machine advanced once per scan tick. Two stable samples are needed before a press
//! or a release is trusted, and the press/release history is classified into [`Gesture`]s on the way.

use crate::config::Timing;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing the gestures a button can emit.
pub enum Gesture {
    /// Press confirmed
    KeyDown,
    /// Release confirmed
    KeyUp,
    /// Press held past the long push threshold
    LongPush,
    /// Second press inside the double click window
    DoubleClick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing the state of the debouncer.
pub enum State {
    /// Released and stable.
    Idle,
    /// First pressed sample seen.
    PressArmed,
    /// Second consecutive pressed sample seen.
    PressDetected,
    /// Press confirmed, `held` counts the ticks since.
    Pressed {
        /// Ticks spent pressed
        held: u32,
    },
    /// Long push threshold reached, waiting for the next sample.
    LongPush,
    /// First released sample seen after a press.
    ReleaseDetected,
    /// Release confirmed, `idle` counts the ticks of the double click window.
    Click {
        /// Ticks spent released
        idle: u32,
    },
}

#[derive(Debug)]
/// Struct representing the debounce and gesture state of one button.
pub struct Debouncer {
    state: State,
    timing: Timing,
}

impl Debouncer {
    /// Creates a new idle Debouncer with the given tick thresholds.
    pub fn new(timing: Timing) -> Self {
        Self {
            state: State::Idle,
            timing,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Ticks spent in the pressed state, zero in any other state.
    pub fn pressed_ticks(&self) -> u32 {
        match self.state {
            State::Pressed { held } => held,
            _ => 0,
        }
    }

    /// Ticks spent in the double click window, zero in any other state.
    pub fn click_ticks(&self) -> u32 {
        match self.state {
            State::Click { idle } => idle,
            _ => 0,
        }
    }

    /// Returns to idle, discarding any gesture in progress.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Advances the state machine by one tick, `pressed` being the current sample.
    pub fn advance(&mut self, pressed: bool) -> Option<Gesture> {
        let (next, gesture) = match (self.state, pressed) {
            (State::Idle, true) => (State::PressArmed, None),
            (State::Idle, false) => (State::Idle, None),

            (State::PressArmed, true) => (State::PressDetected, None),
            (State::PressArmed, false) => (State::Idle, None),

            (State::PressDetected, true) => (State::Pressed { held: 0 }, Some(Gesture::KeyDown)),
            (State::PressDetected, false) => (State::PressArmed, None),

            (State::Pressed { held }, true) => {
                let held = held.saturating_add(1);
                if held >= self.timing.long_push_ticks {
                    (State::LongPush, None)
                } else {
                    (State::Pressed { held }, None)
                }
            }
            (State::Pressed { .. }, false) => (State::ReleaseDetected, None),

            // Still held: report and re-arm, so a key kept down repeats
            (State::LongPush, true) => (State::Idle, Some(Gesture::LongPush)),
            (State::LongPush, false) => (State::ReleaseDetected, None),

            (State::ReleaseDetected, true) => (State::Pressed { held: 0 }, None),
            (State::ReleaseDetected, false) => (State::Click { idle: 0 }, Some(Gesture::KeyUp)),

            (State::Click { .. }, true) => (State::Idle, Some(Gesture::DoubleClick)),
            (State::Click { idle }, false) => {
                let idle = idle.saturating_add(1);
                if idle >= self.timing.double_click_ticks {
                    (State::Idle, None)
                } else {
                    (State::Click { idle }, None)
                }
            }
        };

        self.state = next;
        gesture
    }
}
