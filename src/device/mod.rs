//! LSM6DS33 driver
//!
//! All register traffic goes through [`Lsm6ds33::write_register`] and
//! [`Lsm6ds33::read_register`]. Output registers are read as bursts, which
//! relies on the IF_INC bit that [`Lsm6ds33::start`] sets in CTRL3_C.

use crate::config::{self, Lsm6ds33Config};
use crate::registers::{Register, CTRL_DISABLE, WHO_AM_I_VALUE};
use crate::transport::Transport;
use byteorder::{ByteOrder, LittleEndian};
use embedded_hal::blocking::delay::DelayMs;

// Time the device needs after the control registers are cleared
const SETTLE_MS: u8 = 50;

const TEMP_OFFSET_C: i16 = 25;
const TEMP_LSB_PER_C: i16 = 16;

/// One X/Y/Z reading in raw sensor counts
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Axes {
  pub x: i16,
  pub y: i16,
  pub z: i16,
}

impl Axes {
  fn from_le_bytes(buf: &[u8; 6]) -> Self {
    Axes {
      x: LittleEndian::read_i16(&buf[0..2]),
      y: LittleEndian::read_i16(&buf[2..4]),
      z: LittleEndian::read_i16(&buf[4..6]),
    }
  }
}

/// Accelerometer, gyroscope and temperature read back to back
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sample {
  pub accel_x: i16,
  pub accel_y: i16,
  pub accel_z: i16,
  pub gyro_x: i16,
  pub gyro_y: i16,
  pub gyro_z: i16,
  /// Raw OUT_TEMP value, see [`Sample::celsius`]
  pub temp: i16,
}

impl Sample {
  pub fn accel(&self) -> Axes {
    Axes {
      x: self.accel_x,
      y: self.accel_y,
      z: self.accel_z,
    }
  }

  pub fn gyro(&self) -> Axes {
    Axes {
      x: self.gyro_x,
      y: self.gyro_y,
      z: self.gyro_z,
    }
  }

  pub fn celsius(&self) -> i16 {
    temperature_celsius(self.temp)
  }
}

/// Approximate degrees Celsius for a raw OUT_TEMP value.
/// 16 LSB per degree around a 25 °C zero point, truncated toward zero.
pub fn temperature_celsius(raw: i16) -> i16 {
  TEMP_OFFSET_C + raw / TEMP_LSB_PER_C
}

pub struct Lsm6ds33<T> {
  transport: T,
  config: Lsm6ds33Config,
}

impl<T, E> Lsm6ds33<T>
where
  T: Transport<Error = E>,
{
  /// Creates a driver using the power-on configuration from [`config::default`].
  /// Nothing is sent to the device until [`Lsm6ds33::start`].
  pub fn new(transport: T) -> Self {
    Self::with_config(transport, config::default())
  }

  pub fn with_config(transport: T, config: Lsm6ds33Config) -> Self {
    Lsm6ds33 { transport, config }
  }

  pub fn config(&self) -> &Lsm6ds33Config {
    &self.config
  }

  /// Gives the transport back
  pub fn release(self) -> T {
    self.transport
  }

  /// Brings the accelerometer and gyroscope up from a cleared state.
  ///
  /// The three control registers are zeroed, the device is given 50 ms to
  /// settle, then CTRL1_XL, CTRL2_G and CTRL3_C are written with the
  /// configured values. The first failed write ends the sequence.
  pub fn start<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), E> {
    trace!("LSM6DS33: Starting");
    self.write_reg(Register::Ctrl1Xl, CTRL_DISABLE)?;
    self.write_reg(Register::Ctrl2G, CTRL_DISABLE)?;
    self.write_reg(Register::Ctrl3C, CTRL_DISABLE)?;

    delay.delay_ms(SETTLE_MS);

    let ctrl1_xl = self.config.ctrl1_xl();
    let ctrl2_g = self.config.ctrl2_g();
    let ctrl3_c = self.config.ctrl3_c();
    trace!(
      "LSM6DS33: CTRL1_XL={:#04x} CTRL2_G={:#04x} CTRL3_C={:#04x}",
      ctrl1_xl,
      ctrl2_g,
      ctrl3_c
    );
    self.write_reg(Register::Ctrl1Xl, ctrl1_xl)?;
    self.write_reg(Register::Ctrl2G, ctrl2_g)?;
    self.write_reg(Register::Ctrl3C, ctrl3_c)?;
    Ok(())
  }

  /// Powers down the accelerometer and gyroscope
  pub fn stop(&mut self) -> Result<(), E> {
    trace!("LSM6DS33: Stopping");
    self.write_reg(Register::Ctrl1Xl, CTRL_DISABLE)?;
    self.write_reg(Register::Ctrl2G, CTRL_DISABLE)?;
    Ok(())
  }

  /// Stops then starts the device. If stopping fails the device is not started.
  pub fn reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), E> {
    self.stop()?;
    self.start(delay)
  }

  /// Reads the WHO_AM_I register
  pub fn read_id(&mut self) -> Result<u8, E> {
    let mut buf: [u8; 1] = [0; 1];
    self.select(Register::WhoAmI)?;
    self.read_register(&mut buf)?;
    trace!("LSM6DS33: Read ID -> {:#04x} <> Expected {:#04x}", buf[0], WHO_AM_I_VALUE);
    Ok(buf[0])
  }

  /// True when WHO_AM_I holds the LSM6DS33 identity
  pub fn check_id(&mut self) -> Result<bool, E> {
    Ok(self.read_id()? == WHO_AM_I_VALUE)
  }

  pub fn read_accel(&mut self) -> Result<Axes, E> {
    self.read_axes(Register::OutxLXl)
  }

  pub fn read_gyro(&mut self) -> Result<Axes, E> {
    self.read_axes(Register::OutxLG)
  }

  /// Temperature in whole degrees Celsius
  pub fn read_temp(&mut self) -> Result<i16, E> {
    Ok(temperature_celsius(self.read_raw_temp()?))
  }

  /// Reads accelerometer, gyroscope and temperature output registers.
  /// The three bursts are separate transactions, so the values may come
  /// from different output periods unless block data update is enabled.
  pub fn read_sample(&mut self) -> Result<Sample, E> {
    let accel = self.read_accel()?;
    let gyro = self.read_gyro()?;
    let temp = self.read_raw_temp()?;
    Ok(Sample {
      accel_x: accel.x,
      accel_y: accel.y,
      accel_z: accel.z,
      gyro_x: gyro.x,
      gyro_y: gyro.y,
      gyro_z: gyro.z,
      temp,
    })
  }

  /// Sends `bytes` as a single write transaction
  pub fn write_register(&mut self, bytes: &[u8]) -> Result<(), E> {
    self.transport.write(bytes)
  }

  /// Reads exactly `buf.len()` bytes
  pub fn read_register(&mut self, buf: &mut [u8]) -> Result<(), E> {
    self.transport.read(buf)
  }

  fn read_raw_temp(&mut self) -> Result<i16, E> {
    let mut buf: [u8; 2] = [0; 2];
    self.select(Register::OutTempL)?;
    self.read_register(&mut buf)?;
    Ok(LittleEndian::read_i16(&buf))
  }

  fn read_axes(&mut self, base: Register) -> Result<Axes, E> {
    let mut buf: [u8; 6] = [0; 6];
    self.select(base)?;
    self.read_register(&mut buf)?;
    Ok(Axes::from_le_bytes(&buf))
  }

  fn select(&mut self, reg: Register) -> Result<(), E> {
    self.write_register(&[reg.addr()])
  }

  fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), E> {
    self.write_register(&[reg.addr(), value])
  }
}
