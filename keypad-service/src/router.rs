//! Gesture to navigation routing

use navigation_interface::{Direction, Navigator};

use crate::button::ButtonId;
use crate::debounce::Gesture;
use crate::keypad::GestureHandler;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing a single call into the navigator.
pub enum Command {
    /// Key event in the given direction
    Navigate(Direction),
    /// Leave the active view
    GoBack,
}

const NONE: &[Command] = &[];
const UP: &[Command] = &[Command::Navigate(Direction::Up)];
const UP_FAST: &[Command] = &[Command::Navigate(Direction::Up); 3];
const DOWN: &[Command] = &[Command::Navigate(Direction::Down)];
const DOWN_FAST: &[Command] = &[Command::Navigate(Direction::Down); 3];
const LEFT: &[Command] = &[Command::Navigate(Direction::Left)];
const RIGHT: &[Command] = &[Command::Navigate(Direction::Right)];
const ENTER: &[Command] = &[Command::Navigate(Direction::Enter)];
const BACK: &[Command] = &[Command::GoBack];
const BACK_TWICE: &[Command] = &[Command::GoBack; 2];

/// Commands issued for `gesture` on button `id`, in order.
///
/// Only key down and long push do anything; a long push scrolls three steps on up/down and backs out two
/// levels on enter.
pub fn commands(id: ButtonId, gesture: Gesture) -> &'static [Command] {
    match (id, gesture) {
        (ButtonId::Up, Gesture::KeyDown) => UP,
        (ButtonId::Up, Gesture::LongPush) => UP_FAST,
        (ButtonId::Down, Gesture::KeyDown) => DOWN,
        (ButtonId::Down, Gesture::LongPush) => DOWN_FAST,
        (ButtonId::Left, Gesture::KeyDown) => LEFT,
        (ButtonId::Right, Gesture::KeyDown) => RIGHT,
        (ButtonId::Enter, Gesture::KeyDown) => ENTER,
        (ButtonId::Enter, Gesture::LongPush) => BACK_TWICE,
        (ButtonId::Escape, Gesture::KeyDown) => BACK,
        _ => NONE,
    }
}

/// Applies the routing table to a [`Navigator`].
pub struct Router<N> {
    navigator: N,
}

impl<N: Navigator> Router<N> {
    /// Creates a router driving `navigator`; pass `&mut` to keep ownership elsewhere.
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Returns the navigator.
    pub fn navigator(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Releases the navigator.
    pub fn free(self) -> N {
        self.navigator
    }
}

impl<N: Navigator> GestureHandler for Router<N> {
    fn on_gesture(&mut self, id: ButtonId, gesture: Gesture) {
        debug!("{:?} {:?}", id, gesture);

        for command in commands(id, gesture) {
            match *command {
                Command::Navigate(direction) => self.navigator.on_key_event(direction),
                Command::GoBack => self.navigator.go_back(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Command>,
    }

    impl Navigator for Recorder {
        fn on_key_event(&mut self, direction: Direction) {
            self.calls.push(Command::Navigate(direction));
        }

        fn go_back(&mut self) {
            self.calls.push(Command::GoBack);
        }
    }

    fn route(id: ButtonId, gesture: Gesture) -> Vec<Command> {
        let mut recorder = Recorder::default();
        Router::new(&mut recorder).on_gesture(id, gesture);
        recorder.calls
    }

    #[test]
    fn test_key_down() {
        assert_eq!(route(ButtonId::Up, Gesture::KeyDown), [Command::Navigate(Direction::Up)]);
        assert_eq!(route(ButtonId::Down, Gesture::KeyDown), [Command::Navigate(Direction::Down)]);
        assert_eq!(route(ButtonId::Left, Gesture::KeyDown), [Command::Navigate(Direction::Left)]);
        assert_eq!(route(ButtonId::Right, Gesture::KeyDown), [Command::Navigate(Direction::Right)]);
        assert_eq!(route(ButtonId::Enter, Gesture::KeyDown), [Command::Navigate(Direction::Enter)]);
        assert_eq!(route(ButtonId::Escape, Gesture::KeyDown), [Command::GoBack]);
    }

    #[test]
    fn test_long_push() {
        assert_eq!(route(ButtonId::Up, Gesture::LongPush), [Command::Navigate(Direction::Up); 3]);
        assert_eq!(route(ButtonId::Down, Gesture::LongPush), [Command::Navigate(Direction::Down); 3]);
        assert!(route(ButtonId::Left, Gesture::LongPush).is_empty());
        assert!(route(ButtonId::Right, Gesture::LongPush).is_empty());
        assert!(route(ButtonId::Escape, Gesture::LongPush).is_empty());
    }

    #[test]
    fn test_enter_long_push_goes_back_twice() {
        assert_eq!(route(ButtonId::Enter, Gesture::LongPush), [Command::GoBack, Command::GoBack]);
    }

    #[test]
    fn test_key_up_and_double_click_ignored() {
        for id in ButtonId::ALL {
            assert!(route(id, Gesture::KeyUp).is_empty());
            assert!(route(id, Gesture::DoubleClick).is_empty());
        }
    }

    #[test]
    fn test_owned_navigator() {
        let mut router = Router::new(Recorder::default());

        router.on_gesture(ButtonId::Up, Gesture::KeyDown);
        assert_eq!(router.navigator().calls.len(), 1);

        router.on_gesture(ButtonId::Escape, Gesture::KeyDown);
        assert_eq!(router.free().calls, [Command::Navigate(Direction::Up), Command::GoBack]);
    }
}
