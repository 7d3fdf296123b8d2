//! Network subsystem - Wi-Fi link, TCP/IP stack, and the broker session.

pub mod mqtt;
pub mod wifi;

/// TCP/IP stack service task - must run for the duration of the program.
#[embassy_executor::task]
pub async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
