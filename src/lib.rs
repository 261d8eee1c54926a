//! # ST LSM6DS33 Accelerometer and Gyroscope Library
//!
//! The LSM6DS33 exposes both I2C and SPI interfaces. This crate talks to it
//! through a small [`Transport`] trait, and ships an adapter for any
//! embedded_hal blocking I2C bus, so the driver stays device neutral.
//!
//! Every driver operation returns a `Result`. Wrap the driver in a
//! [`Session`] to get stop-at-first-error behaviour across a chain of calls.
//!
//! See the main datasheet for this sensor [Data Sheet](https://www.st.com/resource/en/datasheet/lsm6ds33.pdf)
//!

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "semihosting")]
macro_rules! trace {
  ($($arg:tt)*) => {{
    let _ = cortex_m_semihosting::hprintln!($($arg)*);
  }};
}

#[cfg(not(feature = "semihosting"))]
macro_rules! trace {
  ($($arg:tt)*) => {{}};
}

pub mod config;
pub mod device;
pub mod i2c;
pub mod registers;
pub mod session;
pub mod transport;

pub use device::{Axes, Lsm6ds33, Sample};
pub use i2c::{I2cTransport, I2C_ADDRESS, I2C_ADDRESS_SA0_LOW};
pub use registers::WHO_AM_I_VALUE;
pub use session::Session;
pub use transport::Transport;
