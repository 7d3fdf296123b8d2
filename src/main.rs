//! mq2usb firmware entry point (Raspberry Pi Pico W).
//!
//! Task layout:
//! - `wifi_task` / `net_task` service the CYW43 radio and the TCP/IP stack
//! - `run_usb_device` enumerates the HID keyboard and tracks attachment
//! - `mqtt_task` holds the broker session and decodes inbound commands
//! - `typist_task` drains the command queue and types payloads
//! - `indicator_task` applies status changes to the on-board LED

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{self, Pio};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::Delay;
use rand_core::RngCore;
use static_cell::StaticCell;

use mq2usb::command::KeystrokePayload;
use mq2usb::config;
use mq2usb::led;
use mq2usb::net::{self, mqtt, wifi};
use mq2usb::typist::Typist;
use mq2usb::usb::hid_device::{self, UsbKeySink};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
});

/// Single-consumer queue between the broker session and the typist: it
/// serializes payloads so report sequences never interleave on the wire.
static COMMANDS: Channel<
    CriticalSectionRawMutex,
    KeystrokePayload,
    { config::COMMAND_QUEUE_DEPTH },
> = Channel::new();

static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<8>> = StaticCell::new();

type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, KeystrokePayload, { config::COMMAND_QUEUE_DEPTH }>;

/// Types queued payloads, one at a time, onto the attached host.
#[embassy_executor::task]
async fn typist_task(mut sink: UsbKeySink, commands: CommandReceiver) -> ! {
    let mut typist = Typist::new(Delay);
    loop {
        let payload = commands.receive().await;
        let outcome = typist.type_payload(&mut sink, &payload).await;
        if outcome.skipped > 0 {
            warn!("{} payload bytes had no keycode mapping", outcome.skipped);
        }
        if !outcome.completed {
            warn!("host detached, dropped remainder of payload");
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("mq2usb starting");

    // Radio firmware blobs, flashed separately:
    //   probe-rs download 43439A0.bin --binary-format bin --chip RP2040 --base-address 0x10100000
    //   probe-rs download 43439A0_clm.bin --binary-format bin --chip RP2040 --base-address 0x10140000
    let fw = unsafe { core::slice::from_raw_parts(0x10100000 as *const u8, 230321) };
    let clm = unsafe { core::slice::from_raw_parts(0x10140000 as *const u8, 4752) };

    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.must_spawn(wifi::wifi_task(runner));

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    // Bring USB up first so the keyboard enumerates while Wi-Fi associates.
    let usb = hid_device::init(p.USB);
    spawner.must_spawn(hid_device::run_usb_device(usb.device));
    spawner.must_spawn(typist_task(
        UsbKeySink::new(usb.keyboard_writer),
        COMMANDS.receiver(),
    ));

    let mut rng = RoscRng;
    let net_config = embassy_net::Config::dhcpv4(Default::default());
    let (stack, net_runner) = embassy_net::new(
        net_device,
        net_config,
        NET_RESOURCES.init(StackResources::new()),
        rng.next_u64(),
    );
    spawner.must_spawn(net::net_task(net_runner));

    wifi::join(&mut control).await;
    stack.wait_config_up().await;
    info!("network up");

    spawner.must_spawn(led::indicator_task(control));
    spawner.must_spawn(mqtt::mqtt_task(stack, COMMANDS.sender()));
}
