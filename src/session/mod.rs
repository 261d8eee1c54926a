//! Stop-at-first-error wrapper around [`Lsm6ds33`]
//!
//! A [`Session`] remembers the first error any operation returns. From then
//! on every operation returns that same error and the transport is left
//! alone. [`Session::reset`] does not clear it; build a new session from
//! [`Session::into_inner`] once the bus is known to be healthy again.

use crate::device::{Axes, Lsm6ds33, Sample};
use crate::transport::Transport;
use embedded_hal::blocking::delay::DelayMs;

pub struct Session<T, E> {
  device: Lsm6ds33<T>,
  error: Option<E>,
}

impl<T, E> Session<T, E>
where
  T: Transport<Error = E>,
  E: Clone,
{
  pub fn new(device: Lsm6ds33<T>) -> Self {
    Session {
      device,
      error: None,
    }
  }

  /// The latched error, if any
  pub fn error(&self) -> Option<&E> {
    self.error.as_ref()
  }

  pub fn into_inner(self) -> Lsm6ds33<T> {
    self.device
  }

  pub fn start<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), E> {
    self.run(|device| device.start(delay))
  }

  pub fn stop(&mut self) -> Result<(), E> {
    self.run(Lsm6ds33::stop)
  }

  pub fn reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), E> {
    self.run(|device| device.reset(delay))
  }

  pub fn read_id(&mut self) -> Result<u8, E> {
    self.run(Lsm6ds33::read_id)
  }

  pub fn check_id(&mut self) -> Result<bool, E> {
    self.run(Lsm6ds33::check_id)
  }

  pub fn read_accel(&mut self) -> Result<Axes, E> {
    self.run(Lsm6ds33::read_accel)
  }

  pub fn read_gyro(&mut self) -> Result<Axes, E> {
    self.run(Lsm6ds33::read_gyro)
  }

  pub fn read_temp(&mut self) -> Result<i16, E> {
    self.run(Lsm6ds33::read_temp)
  }

  pub fn read_sample(&mut self) -> Result<Sample, E> {
    self.run(Lsm6ds33::read_sample)
  }

  fn run<R, F>(&mut self, op: F) -> Result<R, E>
  where
    F: FnOnce(&mut Lsm6ds33<T>) -> Result<R, E>,
  {
    if let Some(err) = &self.error {
      return Err(err.clone());
    }
    match op(&mut self.device) {
      Ok(value) => Ok(value),
      Err(err) => {
        trace!("LSM6DS33: Bus error, session halted");
        self.error = Some(err.clone());
        Err(err)
      }
    }
  }
}
