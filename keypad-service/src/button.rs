//! Button Service Definitions

use embedded_hal::digital::InputPin;

use crate::config::{ActiveState, Timing};
use crate::debounce::{Debouncer, Gesture, State};
use crate::InitError;

/// Logical identity of a keypad button
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Up key
    Up,
    /// Down key
    Down,
    /// Left key
    Left,
    /// Right key
    Right,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
}

impl ButtonId {
    /// Every button, in scan order
    pub const ALL: [ButtonId; 6] = [
        ButtonId::Up,
        ButtonId::Down,
        ButtonId::Left,
        ButtonId::Right,
        ButtonId::Enter,
        ButtonId::Escape,
    ];
}

#[derive(Debug)]
/// A struct representing a button with a generic GPIO pin and a debouncer.
pub struct Button<I> {
    id: ButtonId,
    gpio: I,
    active_state: ActiveState,
    debouncer: Debouncer,
}

impl<I: InputPin> Button<I> {
    /// Creates a new `Button`, reading the pin once to make sure it is usable.
    pub fn new(id: ButtonId, mut gpio: I, active_state: ActiveState, timing: Timing) -> Result<Self, InitError> {
        gpio.is_high().map_err(|_| InitError::PinUnavailable(id))?;

        Ok(Self {
            id,
            gpio,
            active_state,
            debouncer: Debouncer::new(timing),
        })
    }

    /// Returns the logical identity of this button.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Returns the debouncer state.
    pub fn state(&self) -> State {
        self.debouncer.state()
    }

    /// Returns the debouncer.
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Instantaneous, undebounced reading. A pin error reads as released.
    pub fn is_pressed(&mut self) -> bool {
        match self.active_state {
            ActiveState::ActiveLow => self.gpio.is_low().unwrap_or(false),
            ActiveState::ActiveHigh => self.gpio.is_high().unwrap_or(false),
        }
    }

    /// Samples the pin and advances the debouncer by one tick.
    pub fn poll(&mut self) -> Option<Gesture> {
        let pressed = self.is_pressed();
        self.debouncer.advance(pressed)
    }

    /// Releases the GPIO pin.
    pub fn free(self) -> I {
        self.gpio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal::digital::{ErrorKind, ErrorType};
    use embedded_hal_mock::eh1::digital::{Mock, State as PinState, Transaction as PinTransaction};

    use crate::config::KeypadConfig;

    fn timing() -> Timing {
        KeypadConfig::default().timing().unwrap()
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_new_reads_pin() {
        let gpio_expectations = [PinTransaction::get(PinState::High)];
        let gpio = Mock::new(&gpio_expectations);

        let button = Button::new(ButtonId::Enter, gpio, ActiveState::ActiveLow, timing()).unwrap();

        assert_eq!(button.id(), ButtonId::Enter);
        assert_eq!(button.state(), State::Idle);

        button.free().done();
    }

    #[test]
    fn test_new_unavailable_pin() {
        let result = Button::new(ButtonId::Left, BrokenPin, ActiveState::ActiveLow, timing());

        assert!(matches!(result, Err(InitError::PinUnavailable(ButtonId::Left))));
    }

    #[test]
    fn test_active_low_press() {
        let gpio_expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
        ];
        let gpio = Mock::new(&gpio_expectations);
        let mut button = Button::new(ButtonId::Up, gpio, ActiveState::ActiveLow, timing()).unwrap();

        assert_eq!(button.poll(), None);
        assert_eq!(button.poll(), None);
        assert_eq!(button.poll(), Some(Gesture::KeyDown));

        button.free().done();
    }

    #[test]
    fn test_active_high_press() {
        let gpio_expectations = [
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
        ];
        let gpio = Mock::new(&gpio_expectations);
        let mut button = Button::new(ButtonId::Down, gpio, ActiveState::ActiveHigh, timing()).unwrap();

        assert_eq!(button.poll(), None);
        assert_eq!(button.poll(), None);
        assert_eq!(button.poll(), Some(Gesture::KeyDown));

        button.free().done();
    }

    #[test]
    fn test_bounce_filtered() {
        let gpio_expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::High),
        ];
        let gpio = Mock::new(&gpio_expectations);
        let mut button = Button::new(ButtonId::Right, gpio, ActiveState::ActiveLow, timing()).unwrap();

        for _ in 0..5 {
            assert_eq!(button.poll(), None);
        }
        assert_eq!(button.state(), State::Idle);

        button.free().done();
    }

    #[test]
    fn test_read_error_is_released() {
        let mut button = Button {
            id: ButtonId::Escape,
            gpio: BrokenPin,
            active_state: ActiveState::ActiveLow,
            debouncer: Debouncer::new(timing()),
        };

        assert!(!button.is_pressed());
        assert_eq!(button.poll(), None);
        assert_eq!(button.state(), State::Idle);
    }
}
