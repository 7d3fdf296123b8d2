//! Status indicator - the Pico W on-board LED.
//!
//! The LED hangs off the CYW43 radio chip (GPIO 0), not the RP2040, so
//! state changes go through the radio control handle. Everyone else
//! requests a state via [`set_indicator`]; the task applies it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

static INDICATOR: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Request an indicator state change. Latest request wins.
pub fn set_indicator(on: bool) {
    INDICATOR.signal(on);
}

/// Applies indicator requests to the LED. Owns the CYW43 control handle
/// for the duration of the program.
#[embassy_executor::task]
pub async fn indicator_task(mut control: cyw43::Control<'static>) -> ! {
    loop {
        let on = INDICATOR.wait().await;
        control.gpio_set(0, on).await;
    }
}
