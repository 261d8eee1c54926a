//! Register map for the LSM6DS33

/// Expected content of the WHO_AM_I register
pub const WHO_AM_I_VALUE: u8 = 0x69;

/// Writing this to a control register powers the sensor down
pub const CTRL_DISABLE: u8 = 0x00;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Register {
  WhoAmI = 0x0F,
  Ctrl1Xl = 0x10,
  Ctrl2G = 0x11,
  Ctrl3C = 0x12,
  OutTempL = 0x20,
  OutxLG = 0x22,
  OutxLXl = 0x28,
}

impl Register {
  pub fn addr(&self) -> u8 {
    *self as u8
  }
}
