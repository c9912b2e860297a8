//! Periodic keypad scanning

use embassy_time::Ticker;
use embedded_hal::digital::InputPin;

use crate::config::KeypadConfig;
use crate::keypad::{GestureHandler, Keypad};

/// Source of scan ticks.
///
/// Implementations must not complete `next_tick` again before the previous scan returned; a single task
/// awaiting an [`embassy_time::Ticker`] satisfies this.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    /// Wait for the next tick
    async fn next_tick(&mut self);
}

impl TickSource for Ticker {
    async fn next_tick(&mut self) {
        self.next().await
    }
}

/// Creates a ticker firing every configured scan period.
pub fn ticker(config: &KeypadConfig) -> Ticker {
    Ticker::every(config.get_scan_period())
}

/// Drives a keypad from a tick source, handing every gesture to `handler`.
pub struct Scanner<'a, I, H, T, const N: usize> {
    keypad: &'a mut Keypad<I, N>,
    handler: H,
    ticks: T,
}

impl<'a, I: InputPin, H: GestureHandler, T: TickSource, const N: usize> Scanner<'a, I, H, T, N> {
    /// Creates a new scanner.
    pub fn new(keypad: &'a mut Keypad<I, N>, handler: H, ticks: T) -> Self {
        Self {
            keypad,
            handler,
            ticks,
        }
    }

    /// Returns the gesture handler.
    pub fn handler(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Waits for the next tick, then scans every button once.
    pub async fn step(&mut self) {
        self.ticks.next_tick().await;
        self.keypad.scan(&mut self.handler);
    }

    /// Scans on every tick, forever.
    pub async fn run(&mut self) -> ! {
        info!("Keypad scanning {} buttons", self.keypad.buttons().len());
        loop {
            self.step().await;
        }
    }
}
