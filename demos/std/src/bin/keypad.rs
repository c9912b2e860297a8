use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_executor::Executor;
use embassy_time::Timer;
use embedded_hal::digital::{ErrorType, InputPin};
use keypad_service::{scan, ButtonId, Keypad, KeypadConfig, Router, Scanner, KEYPAD_SIZE};
use log::{error, info};
use navigation_interface::{Direction, Navigator};
use static_cell::StaticCell;

/// Simulated active low buttons, `true` meaning pressed
static PRESSED: [AtomicBool; KEYPAD_SIZE] = [const { AtomicBool::new(false) }; KEYPAD_SIZE];

struct SimPin(&'static AtomicBool);

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.load(Ordering::Relaxed))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.load(Ordering::Relaxed))
    }
}

/// Mock menu standing in for the active view
#[derive(Default)]
struct Menu {
    row: i32,
    column: i32,
    depth: u32,
}

impl Navigator for Menu {
    fn on_key_event(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.row -= 1,
            Direction::Down => self.row += 1,
            Direction::Left => self.column -= 1,
            Direction::Right => self.column += 1,
            Direction::Enter => self.depth += 1,
        }
        info!(
            "Menu: {:?} -> row {} column {} depth {}",
            direction, self.row, self.column, self.depth
        );
    }

    fn go_back(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        info!("Menu: back -> depth {}", self.depth);
    }
}

fn level(id: ButtonId) -> &'static AtomicBool {
    let index = ButtonId::ALL.iter().position(|b| *b == id).unwrap_or(0);
    &PRESSED[index]
}

async fn hold(id: ButtonId, millis: u64) {
    level(id).store(true, Ordering::Relaxed);
    Timer::after_millis(millis).await;
    level(id).store(false, Ordering::Relaxed);
}

#[embassy_executor::task]
async fn scan_task(keypad: &'static mut Keypad<SimPin>) {
    let ticks = scan::ticker(keypad.config());
    let mut scanner = Scanner::new(keypad, Router::new(Menu::default()), ticks);
    scanner.run().await
}

#[embassy_executor::task]
async fn user() {
    info!("Tap down");
    hold(ButtonId::Down, 80).await;
    Timer::after_millis(500).await;

    info!("Hold up");
    hold(ButtonId::Up, 1200).await;
    Timer::after_millis(500).await;

    info!("Double click right");
    hold(ButtonId::Right, 60).await;
    Timer::after_millis(100).await;
    hold(ButtonId::Right, 60).await;
    Timer::after_millis(500).await;

    info!("Enter twice, then hold enter");
    hold(ButtonId::Enter, 80).await;
    Timer::after_millis(500).await;
    hold(ButtonId::Enter, 80).await;
    Timer::after_millis(500).await;
    hold(ButtonId::Enter, 1100).await;
    Timer::after_millis(500).await;

    info!("Bounce on escape");
    for _ in 0..3 {
        hold(ButtonId::Escape, 5).await;
        Timer::after_millis(5).await;
    }
    hold(ButtonId::Escape, 80).await;

    info!("Done");
}

fn main() {
    env_logger::builder().filter_level(log::LevelFilter::Debug).init();

    let pins = ButtonId::ALL.map(|id| (id, SimPin(level(id))));
    let keypad = match Keypad::build(KeypadConfig::default(), pins) {
        Ok(keypad) => keypad,
        Err(e) => {
            error!("Keypad initialization failed: {:?}", e);
            return;
        }
    };

    static KEYPAD: StaticCell<Keypad<SimPin>> = StaticCell::new();
    let keypad = KEYPAD.init(keypad);

    static EXECUTOR: StaticCell<Executor> = StaticCell::new();
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(scan_task(keypad));
        spawner.must_spawn(user());
    });
}
