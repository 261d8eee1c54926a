//! Configuration settings for the LSM6DS33
//!
//! The control bytes written by [`Lsm6ds33::start`](crate::Lsm6ds33::start)
//! are produced here. [`default`] yields 1.66 kHz / ±2 g for the
//! accelerometer and 1.66 kHz / 245 dps for the gyroscope, i.e. 0x80, 0x80
//! and 0x04 for CTRL1_XL, CTRL2_G and CTRL3_C.

// Mask definitions
const ODR_MASK: u8 = 0xF0;
const ODR_SHIFT: u8 = 4;
const ACCEL_RANGE_MASK: u8 = 0x0C;
const ACCEL_RANGE_SHIFT: u8 = 2;
const GYRO_RANGE_MASK: u8 = 0x0E;

// CTRL3_C bits
const CTRL3_IF_INC: u8 = 0x04;
const CTRL3_BDU: u8 = 0x40;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AccelOutputDataRate {
  PowerDown = 0x00,
  Odr12_5Hz = 0x01,
  Odr26Hz = 0x02,
  Odr52Hz = 0x03,
  Odr104Hz = 0x04,
  Odr208Hz = 0x05,
  Odr416Hz = 0x06,
  Odr833Hz = 0x07,
  Odr1_66kHz = 0x08,
  Odr3_33kHz = 0x09,
  Odr6_66kHz = 0x0A,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AccelRange {
  Range2G = 0x00,
  Range16G = 0x01,
  Range4G = 0x02,
  Range8G = 0x03,
}

/// Configuration data for the accelerometer
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AccelConfig {
  // output data rate
  pub odr: AccelOutputDataRate,
  // range
  pub range: AccelRange,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GyroOutputDataRate {
  PowerDown = 0x00,
  Odr12_5Hz = 0x01,
  Odr26Hz = 0x02,
  Odr52Hz = 0x03,
  Odr104Hz = 0x04,
  Odr208Hz = 0x05,
  Odr416Hz = 0x06,
  Odr833Hz = 0x07,
  Odr1_66kHz = 0x08,
}

/// Values are the FS_G and FS_125 bits already in place
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GyroRange {
  Range245Dps = 0x00,
  Range500Dps = 0x04,
  Range1000Dps = 0x08,
  Range2000Dps = 0x0C,
  Range125Dps = 0x02,
}

/// Configuration data for the gyroscope
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GyroConfig {
  // output data rate
  pub odr: GyroOutputDataRate,
  // range
  pub range: GyroRange,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lsm6ds33Config {
  pub accel_config: AccelConfig,
  pub gyro_config: GyroConfig,
  /// Hold output registers until both bytes of a sample have been read
  pub block_data_update: bool,
}

pub fn default() -> Lsm6ds33Config {
  Lsm6ds33Config {
    accel_config: AccelConfig {
      odr: AccelOutputDataRate::Odr1_66kHz,
      range: AccelRange::Range2G,
    },
    gyro_config: GyroConfig {
      odr: GyroOutputDataRate::Odr1_66kHz,
      range: GyroRange::Range245Dps,
    },
    block_data_update: false,
  }
}

impl Default for Lsm6ds33Config {
  fn default() -> Self {
    self::default()
  }
}

impl Lsm6ds33Config {
  /// Value for CTRL1_XL. The anti-aliasing filter bits are left at zero.
  pub fn ctrl1_xl(&self) -> u8 {
    let odr = (self.accel_config.odr as u8) << ODR_SHIFT;
    let range = (self.accel_config.range as u8) << ACCEL_RANGE_SHIFT;
    (odr & ODR_MASK) | (range & ACCEL_RANGE_MASK)
  }

  /// Value for CTRL2_G
  pub fn ctrl2_g(&self) -> u8 {
    let odr = (self.gyro_config.odr as u8) << ODR_SHIFT;
    let range = self.gyro_config.range as u8;
    (odr & ODR_MASK) | (range & GYRO_RANGE_MASK)
  }

  /// Value for CTRL3_C. Address auto-increment is always on, burst reads
  /// of the output registers depend on it.
  pub fn ctrl3_c(&self) -> u8 {
    if self.block_data_update {
      CTRL3_IF_INC | CTRL3_BDU
    } else {
      CTRL3_IF_INC
    }
  }
}
