//! embedded_hal I2C bus as a [`Transport`]

use crate::transport::Transport;
use embedded_hal::blocking::i2c::{Read, Write};

/// 7-bit address with SA0 pulled high
pub const I2C_ADDRESS: u8 = 0x6B;
/// 7-bit address with SA0 pulled low
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;

/// Binds a blocking I2C bus to one device address.
///
/// Register selects and reads are issued as separate transactions, so the
/// bus only needs `Write` and `Read`.
pub struct I2cTransport<I2C> {
  i2c: I2C,
  addr: u8,
}

impl<I2C, E> I2cTransport<I2C>
where
  I2C: Read<Error = E> + Write<Error = E>,
{
  pub fn new(i2c: I2C) -> Self {
    Self::with_address(i2c, I2C_ADDRESS)
  }

  pub fn with_address(i2c: I2C, addr: u8) -> Self {
    I2cTransport { i2c, addr }
  }

  pub fn addr(&self) -> u8 {
    self.addr
  }

  /// Gives the bus back
  pub fn release(self) -> I2C {
    self.i2c
  }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
  I2C: Read<Error = E> + Write<Error = E>,
{
  type Error = E;

  fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
    self.i2c.write(self.addr, bytes)
  }

  fn read(&mut self, buffer: &mut [u8]) -> Result<(), E> {
    self.i2c.read(self.addr, buffer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::device::{Axes, Lsm6ds33};
  use crate::session::Session;
  use crate::transport::fake::FakeTransport;
  use embedded_hal_mock::eh0::i2c::{Mock as I2cMock, Transaction as I2cTrans};
  use embedded_hal_mock::eh0::MockError;
  use std::io::ErrorKind;

  fn trans_start() -> Vec<I2cTrans> {
    vec![
      I2cTrans::write(I2C_ADDRESS, vec![0x10, 0x00]),
      I2cTrans::write(I2C_ADDRESS, vec![0x11, 0x00]),
      I2cTrans::write(I2C_ADDRESS, vec![0x12, 0x00]),
      I2cTrans::write(I2C_ADDRESS, vec![0x10, 0x80]),
      I2cTrans::write(I2C_ADDRESS, vec![0x11, 0x80]),
      I2cTrans::write(I2C_ADDRESS, vec![0x12, 0x04]),
    ]
  }

  #[test]
  fn start_and_read_over_i2c() {
    let mut expectations = trans_start();
    expectations.push(I2cTrans::write(I2C_ADDRESS, vec![0x0F]));
    expectations.push(I2cTrans::read(I2C_ADDRESS, vec![0x69]));
    expectations.push(I2cTrans::write(I2C_ADDRESS, vec![0x28]));
    expectations.push(I2cTrans::read(
      I2C_ADDRESS,
      vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x40],
    ));
    let i2c = I2cMock::new(&expectations);

    let mut imu = Lsm6ds33::new(I2cTransport::new(i2c));
    imu.start(&mut FakeTransport::new().delay()).unwrap();
    assert_eq!(imu.read_id().unwrap(), 0x69);
    assert_eq!(imu.read_accel().unwrap(), Axes { x: 0, y: 0, z: 0x4000 });

    let mut i2c = imu.release().release();
    i2c.done();
  }

  #[test]
  fn alternate_address_is_used_for_every_transaction() {
    let expectations = [
      I2cTrans::write(I2C_ADDRESS_SA0_LOW, vec![0x20]),
      I2cTrans::read(I2C_ADDRESS_SA0_LOW, vec![0x30, 0x00]),
    ];
    let i2c = I2cMock::new(&expectations);

    let transport = I2cTransport::with_address(i2c, I2C_ADDRESS_SA0_LOW);
    assert_eq!(transport.addr(), I2C_ADDRESS_SA0_LOW);
    let mut imu = Lsm6ds33::new(transport);
    assert_eq!(imu.read_temp().unwrap(), 28);

    let mut i2c = imu.release().release();
    i2c.done();
  }

  #[test]
  fn bus_error_is_latched_by_session() {
    let expectations = [
      I2cTrans::write(I2C_ADDRESS, vec![0x0F]),
      I2cTrans::read(I2C_ADDRESS, vec![0x00]).with_error(MockError::Io(ErrorKind::Other)),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut session = Session::new(Lsm6ds33::new(I2cTransport::new(i2c)));
    let err = MockError::Io(ErrorKind::Other);
    assert_eq!(session.read_id(), Err(err.clone()));
    // no transactions left in the mock, so any I/O here would panic
    assert_eq!(session.read_gyro(), Err(err.clone()));
    assert_eq!(session.stop(), Err(err));

    let mut i2c = session.into_inner().release().release();
    i2c.done();
  }
}
