//! CYW43 radio bring-up and Wi-Fi association.

use cyw43::JoinOptions;
use cyw43_pio::PioSpi;
use defmt::{info, warn};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};

use crate::config;

/// Radio driver task - services the CYW43 chip for the duration of the
/// program.
#[embassy_executor::task]
pub async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Join the configured network, retrying until association succeeds.
pub async fn join(control: &mut cyw43::Control<'_>) {
    loop {
        match control
            .join(
                config::WIFI_SSID,
                JoinOptions::new(config::WIFI_PASSWORD.as_bytes()),
            )
            .await
        {
            Ok(()) => break,
            Err(err) => {
                warn!(
                    "joining {} failed with status {}, retrying",
                    config::WIFI_SSID, err.status
                );
            }
        }
    }
    info!("joined {}", config::WIFI_SSID);
}
