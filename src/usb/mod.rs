//! USB Device subsystem - presents a HID keyboard to the host.
//!
//! The RP2040's built-in USB 1.1 Full-Speed controller is driven by
//! `embassy-usb`.  A single boot-protocol keyboard interface is exposed;
//! the typist task writes reports to it through [`hid_device::UsbKeySink`],
//! which also surfaces the host attachment state the emitter gates on.

pub mod hid_device;
