//! Keypad registry
//!
//! The fixed set of buttons scanned together, and the [`GestureHandler`] seam through which resolved
//! gestures leave the scan context.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::button::{Button, ButtonId};
use crate::config::{KeypadConfig, Timing};
use crate::debounce::Gesture;
use crate::InitError;

/// Number of buttons on the device keypad
pub const KEYPAD_SIZE: usize = ButtonId::ALL.len();

/// A gesture tagged with the button it came from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// Source button
    pub id: ButtonId,
    /// Resolved gesture
    pub gesture: Gesture,
}

/// Consumer of the gestures resolved during a scan.
///
/// Called synchronously from the scan context, at most once per button per tick.
pub trait GestureHandler {
    /// Handle a gesture from button `id`
    fn on_gesture(&mut self, id: ButtonId, gesture: Gesture);
}

impl<F: FnMut(ButtonId, Gesture)> GestureHandler for F {
    fn on_gesture(&mut self, id: ButtonId, gesture: Gesture) {
        self(id, gesture)
    }
}

/// Forwards gestures to another task. Never blocks the scan: if the channel is full the gesture is dropped.
impl<M: RawMutex, const N: usize> GestureHandler for Sender<'_, M, Event, N> {
    fn on_gesture(&mut self, id: ButtonId, gesture: Gesture) {
        if self.try_send(Event { id, gesture }).is_err() {
            warn!("Gesture channel full, dropping {:?} from {:?}", gesture, id);
        }
    }
}

/// Ordered collection of buttons, scanned in registration order.
pub struct Keypad<I, const N: usize = KEYPAD_SIZE> {
    config: KeypadConfig,
    timing: Timing,
    buttons: Vec<Button<I>, N>,
}

impl<I: InputPin, const N: usize> Keypad<I, N> {
    /// Creates an empty keypad, validating the configuration.
    pub fn new(config: KeypadConfig) -> Result<Self, InitError> {
        let timing = config.timing()?;
        debug!(
            "Keypad timing: long push {} ticks, double click {} ticks",
            timing.long_push_ticks,
            timing.double_click_ticks
        );

        Ok(Self {
            config,
            timing,
            buttons: Vec::new(),
        })
    }

    /// Builds a keypad from `(id, pin)` pairs, in scan order.
    pub fn build(config: KeypadConfig, pins: impl IntoIterator<Item = (ButtonId, I)>) -> Result<Self, InitError> {
        let mut keypad = Self::new(config)?;
        for (id, gpio) in pins {
            keypad.add(id, gpio)?;
        }
        Ok(keypad)
    }

    /// Registers a button at the end of the scan order.
    pub fn add(&mut self, id: ButtonId, gpio: I) -> Result<(), InitError> {
        if self.buttons.iter().any(|b| b.id() == id) {
            error!("Button {:?} registered twice", id);
            return Err(InitError::DuplicateButton(id));
        }
        if self.buttons.is_full() {
            error!("Keypad full, cannot register {:?}", id);
            return Err(InitError::RegistryFull(id));
        }

        let button = Button::new(id, gpio, self.config.get_active_state(), self.timing).inspect_err(|_| {
            error!("Button {:?} pin unavailable", id);
        })?;

        // Capacity checked above
        let _ = self.buttons.push(button);
        info!("Button {:?} registered", id);
        Ok(())
    }

    /// Advances every button by one tick, in registration order.
    pub fn scan<H: GestureHandler>(&mut self, handler: &mut H) {
        for button in self.buttons.iter_mut() {
            if let Some(gesture) = button.poll() {
                handler.on_gesture(button.id(), gesture);
            }
        }
    }

    /// Returns the configuration the keypad was built with.
    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Returns the registered buttons, in scan order.
    pub fn buttons(&self) -> &[Button<I>] {
        &self.buttons
    }

    /// Looks up a button by identity.
    pub fn button(&self, id: ButtonId) -> Option<&Button<I>> {
        self.buttons.iter().find(|b| b.id() == id)
    }

    /// Instantaneous, undebounced reading of button `id`; `None` if it isn't registered.
    pub fn is_pressed(&mut self, id: ButtonId) -> Option<bool> {
        self.buttons.iter_mut().find(|b| b.id() == id).map(Button::is_pressed)
    }

    /// Dismantles the keypad, returning the buttons.
    pub fn free(self) -> Vec<Button<I>, N> {
        self.buttons
    }
}
