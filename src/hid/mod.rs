//! HID report types and the ASCII→keycode translation table.

pub mod keyboard;
pub mod keymap;

#[cfg(test)]
mod tests;

pub use keyboard::KeyboardReport;
