#![no_std]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Async-first**: Built on `embedded-hal-async` I2C traits
//! - **Bus passed in**: The driver owns the bus handle it is given, so several
//!   devices and in-memory fakes work the same way
//! - **Raw counts**: Samples are exposed as signed 16-bit counts, no scaling
//! - **Typed registers**: Multi-field registers are modelled as bitfield structs
//!
//! ## Module Organization
//!
//! - [`gyro`]: Start-up configuration and sample reading
//! - [`power`]: Power management and sleep
//! - [`interrupt`]: Interrupt pin configuration and data-ready polling
//!
//! ## Basic Usage
//!
//! ```no_run
//! # use embedded_hal_async::i2c::I2c;
//! # async fn example<I: I2c>(i2c: I) -> Result<(), itg3701::Error<I::Error>> {
//! use itg3701::{gyro::GyroConfig, Itg3701};
//!
//! let mut gyro = Itg3701::new(i2c);
//!
//! // Wake the device and program the default range
//! gyro.begin(GyroConfig::default()).await?;
//!
//! for _ in 0..100 {
//!   let rate = gyro.sample().await?;
//!   println!("x={} y={} z={}", rate.x, rate.y, rate.z);
//! }
//! # Ok(())
//! # }
//! ```

use embedded_hal_async::i2c::*;
use micromath::vector::Vector3d;

#[macro_use]
mod fmt;

mod defs;
pub mod gyro;
pub mod interrupt;
pub mod power;
pub(crate) mod rw;
mod types;

use defs::*;
use gyro::GyroConfig;
pub use types::*;

/// Driver error type.
///
/// Wraps the underlying I2C error. Bus faults are reported, never retried.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I2C communication error
  I2c(E),
  /// WHO_AM_I mismatch (expected 0x68)
  InvalidChipId(u8),
  /// A register value could not be decoded
  Data,
}

/// ITG-3701 device driver instance.
///
/// Owns the I2C bus handle, the device address, the configuration recorded
/// by [`begin`](Self::begin) and the last reading taken by
/// [`sample`](Self::sample).
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal_async::i2c::I2c`)
pub struct Itg3701<I> {
  i2c: I,
  address: u8,
  config: Option<GyroConfig>,
  gyro: Vector3d<i16>,
}

impl<I> Itg3701<I> {
  /// Whether `begin` programs `rate` and `bandwidth` into the device.
  ///
  /// Both are recorded only; the filter and divider registers get fixed
  /// values.
  pub const APPLIES_RATE_AND_BANDWIDTH: bool = false;

  /// Create a driver for a device at the default address (0x68). No bus
  /// traffic.
  pub fn new(i2c: I) -> Self {
    Self::with_address(i2c, Address::Primary)
  }

  /// Create a driver for a device at `address`. No bus traffic.
  pub fn with_address(i2c: I, address: Address) -> Self {
    Self { i2c, address: address.into(), config: None, gyro: Vector3d { x: 0, y: 0, z: 0 } }
  }

  /// Bus address this driver talks to.
  pub fn address(&self) -> u8 {
    self.address
  }

  /// Lifecycle state: `Configured` after a successful `begin`.
  pub fn state(&self) -> State {
    match self.config {
      Some(_) => State::Configured,
      None => State::Uninitialized,
    }
  }

  /// Shorthand for `state() == State::Configured`.
  pub fn is_configured(&self) -> bool {
    self.config.is_some()
  }

  /// Configuration recorded by the last successful [`begin`](Self::begin).
  pub fn config(&self) -> Option<&GyroConfig> {
    self.config.as_ref()
  }

  /// Most recent reading from [`sample`](Self::sample), in raw counts.
  pub fn gyro(&self) -> Vector3d<i16> {
    self.gyro
  }

  /// Direct access to the bus handle.
  pub fn i2c(&mut self) -> &mut I {
    &mut self.i2c
  }

  /// Give the bus back.
  pub fn release(self) -> I {
    self.i2c
  }
}

impl<I, E> Itg3701<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read the WHO_AM_I register.
  ///
  /// Returns `0x68` on a genuine device, regardless of the AD0 strap.
  pub async fn get_id(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::WhoAmI).await
  }

  /// Check WHO_AM_I against the expected identity.
  pub async fn verify_id(&mut self) -> Result<(), Error<E>> {
    match self.get_id().await? {
      ITG3701_CHIP_ID => Ok(()),
      id => {
        warn!("unexpected WHO_AM_I {:#x}", id);
        Err(Error::InvalidChipId(id))
      }
    }
  }

  /// Read the raw temperature output (device-specific units).
  pub async fn get_temperature_raw(&mut self) -> Result<i16, Error<E>> {
    let mut b = [0u8; 2];
    self.read_bytes(Reg::TempOutH, &mut b).await?;
    Ok(i16::from_be_bytes(b))
  }
}
