//! Keypad configuration

use embassy_time::Duration;

use crate::InitError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing if the button is active low or active high.
pub enum ActiveState {
    /// Button is active low.
    ActiveLow,
    /// Button is active high.
    ActiveHigh,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Struct representing the configuration shared by every button of a keypad.
pub struct KeypadConfig {
    scan_period: Duration,
    long_push_threshold: Duration,
    double_click_threshold: Duration,
    active_state: ActiveState,
}

/// Gesture thresholds expressed in scan ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Ticks a press must be held before it counts as a long push
    pub long_push_ticks: u32,
    /// Ticks after a release during which a second press counts as a double click
    pub double_click_ticks: u32,
}

impl KeypadConfig {
    /// Creates a new KeypadConfig instance.
    pub fn new(
        scan_period: Duration,
        long_push_threshold: Duration,
        double_click_threshold: Duration,
        active_state: ActiveState,
    ) -> Self {
        Self {
            scan_period,
            long_push_threshold,
            double_click_threshold,
            active_state,
        }
    }

    /// Gets the interval between two scans.
    pub fn get_scan_period(&self) -> Duration {
        self.scan_period
    }

    /// Gets the long push threshold duration.
    pub fn get_long_push_threshold(&self) -> Duration {
        self.long_push_threshold
    }

    /// Gets the double click threshold duration.
    pub fn get_double_click_threshold(&self) -> Duration {
        self.double_click_threshold
    }

    /// Gets the electrical polarity of the buttons.
    pub fn get_active_state(&self) -> ActiveState {
        self.active_state
    }

    /// Converts the thresholds to whole scan ticks, rounding down.
    pub fn timing(&self) -> Result<Timing, InitError> {
        let period = self.scan_period.as_ticks();
        if period == 0 {
            return Err(InitError::InvalidScanPeriod);
        }

        Ok(Timing {
            long_push_ticks: threshold_ticks(self.long_push_threshold, period)?,
            double_click_ticks: threshold_ticks(self.double_click_threshold, period)?,
        })
    }
}

// A threshold below one period would fire on the first counted tick.
fn threshold_ticks(threshold: Duration, period: u64) -> Result<u32, InitError> {
    match u32::try_from(threshold.as_ticks() / period) {
        Ok(0) | Err(_) => Err(InitError::InvalidThreshold),
        Ok(ticks) => Ok(ticks),
    }
}

/// Default configuration: 10ms scan, 1s long push, 300ms double click window, active low.
impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            scan_period: Duration::from_millis(10),
            long_push_threshold: Duration::from_millis(1000),
            double_click_threshold: Duration::from_millis(300),
            active_state: ActiveState::ActiveLow,
        }
    }
}
