//! Byte channel the driver talks through

/// A duplex byte channel to the sensor.
///
/// The channel is already addressed at the device; `write` sends one bus
/// transaction and `read` fills the whole buffer or fails.
pub trait Transport {
  type Error;

  fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
  fn read(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
  type Error = T::Error;

  fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
    (**self).write(bytes)
  }

  fn read(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
    (**self).read(buffer)
  }
}
