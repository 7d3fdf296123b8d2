//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the RP2040 hardware USB
//! peripheral and exposes a single boot-protocol keyboard endpoint.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{info, warn};
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use crate::config;
use crate::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use crate::typist::KeySink;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

static KB_STATE: StaticCell<State<'static>> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_ATTACH_HANDLER: StaticCell<AttachHandler> = StaticCell::new();

static CONFIGURED: AtomicBool = AtomicBool::new(false);
static SUSPENDED: AtomicBool = AtomicBool::new(false);

/// Tracks whether a host is able to receive reports right now.
struct AttachHandler;

impl embassy_usb::Handler for AttachHandler {
    fn reset(&mut self) {
        CONFIGURED.store(false, Ordering::Relaxed);
    }

    fn configured(&mut self, configured: bool) {
        CONFIGURED.store(configured, Ordering::Relaxed);
    }

    fn suspended(&mut self, suspended: bool) {
        SUSPENDED.store(suspended, Ordering::Relaxed);
    }
}

/// Whether a USB host has configured the device and the bus is awake.
///
/// Written only by the USB stack via [`AttachHandler`]; everyone else
/// reads.
pub fn host_attached() -> bool {
    CONFIGURED.load(Ordering::Relaxed) && !SUSPENDED.load(Ordering::Relaxed)
}

/// Build result containing the USB device runner and the keyboard writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, Driver<'static, USB>>,
    pub keyboard_writer: HidWriter<'static, Driver<'static, USB>, 8>,
}

/// Initialise the USB stack and create the keyboard HID device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usb: USB) -> UsbHidDevice {
    let driver = Driver::new(usb, Irqs);

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 64]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(USB_ATTACH_HANDLER.init(AttachHandler));

    let kb_state = KB_STATE.init(State::new());
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let keyboard_writer = HidWriter::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!("USB HID keyboard device initialised");

    UsbHidDevice {
        device,
        keyboard_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
#[embassy_executor::task]
pub async fn run_usb_device(mut device: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// [`KeySink`] over the keyboard HID endpoint.
pub struct UsbKeySink {
    writer: HidWriter<'static, Driver<'static, USB>, 8>,
}

impl UsbKeySink {
    pub fn new(writer: HidWriter<'static, Driver<'static, USB>, 8>) -> Self {
        Self { writer }
    }
}

impl KeySink for UsbKeySink {
    fn is_attached(&self) -> bool {
        host_attached()
    }

    async fn send(&mut self, report: &KeyboardReport) {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        let n = report.serialize(&mut buf);
        if let Err(_e) = self.writer.write(&buf[..n]).await {
            warn!("USB keyboard write failed");
        }
    }
}
