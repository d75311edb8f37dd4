//! Interrupt pin configuration and status.
//!
//! `begin` latches the INT pin and enables the data-ready source, but the
//! driver never services the pin. Callers that want to avoid re-reading stale
//! output registers can poll [`Itg3701::is_data_ready`] instead.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut gyro: itg3701::Itg3701<impl embedded_hal_async::i2c::I2c>) {
//! if gyro.is_data_ready().await.unwrap() {
//!   let rate = gyro.sample().await.unwrap();
//! }
//! # }
//! ```

use embedded_hal_async::i2c::*;

use crate::{defs::*, Error, Itg3701};

impl<I, E> Itg3701<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub async fn get_int_pin_config(&mut self) -> Result<IntPinConfig, Error<E>> {
    self.read(Reg::IntPinCfg).await
  }

  pub async fn get_int_enable(&mut self) -> Result<IntEnable, Error<E>> {
    self.read(Reg::IntEnable).await
  }

  /// Read `INT_STATUS`. Clears the latched bits unless `int_rd_clear` is set.
  pub async fn get_int_status(&mut self) -> Result<IntStatus, Error<E>> {
    self.read(Reg::IntStatus).await
  }

  /// Poll the data-ready flag.
  pub async fn is_data_ready(&mut self) -> Result<bool, Error<E>> {
    Ok(self.get_int_status().await?.data_ready)
  }
}

/// `INT_PIN_CFG` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct IntPinConfig {
  #[skip(2)]
  #[bits(1)]
  pub fsync_int_enable: bool,
  #[bits(1)]
  pub fsync_int_level: ActiveLevel,
  /// Clear status bits on any register read instead of only on `INT_STATUS`.
  #[bits(1)]
  pub int_rd_clear: bool,
  /// Hold the pin until the status is cleared instead of a 50 us pulse.
  #[bits(1)]
  pub latch: bool,
  #[bits(1)]
  pub output: OutputMode,
  #[bits(1)]
  pub level: ActiveLevel,
}

impl IntPinConfig {
  /// Active-high push-pull, latched until cleared.
  pub(crate) const fn latched() -> Self {
    Self {
      fsync_int_enable: false,
      fsync_int_level: ActiveLevel::ActiveHigh,
      int_rd_clear: false,
      latch: true,
      output: OutputMode::PushPull,
      level: ActiveLevel::ActiveHigh,
    }
  }
}

/// `INT_ENABLE` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct IntEnable {
  #[bits(1)]
  pub data_ready: bool,
  #[skip(3)]
  #[bits(1)]
  pub fifo_overflow: bool,
}

/// `INT_STATUS` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct IntStatus {
  #[bits(1)]
  pub data_ready: bool,
  #[skip(3)]
  #[bits(1)]
  pub fifo_overflow: bool,
}

/// Pin output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
  #[default]
  PushPull = 0,
  OpenDrain = 1,
}

impl From<OutputMode> for u8 {
  fn from(value: OutputMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for OutputMode {
  type Error = ();
  fn try_from(v: u8) -> Result<Self, Self::Error> {
    match v & 0x01 {
      0 => Ok(OutputMode::PushPull),
      1 => Ok(OutputMode::OpenDrain),
      _ => Err(()),
    }
  }
}

/// Logic level of an asserted pin. The device encodes active-low as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
  #[default]
  ActiveHigh = 0,
  ActiveLow = 1,
}

impl From<ActiveLevel> for u8 {
  fn from(value: ActiveLevel) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for ActiveLevel {
  type Error = ();
  fn try_from(v: u8) -> Result<Self, Self::Error> {
    match v & 0x01 {
      0 => Ok(ActiveLevel::ActiveHigh),
      1 => Ok(ActiveLevel::ActiveLow),
      _ => Err(()),
    }
  }
}
