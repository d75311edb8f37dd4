//! Gyroscope configuration and data reading.
//!
//! [`Itg3701::begin`] programs the device into a known operating state and
//! [`Itg3701::sample`] pulls the latest three-axis reading. Readings are raw
//! signed counts; scaling to degrees per second is left to the caller.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example(mut gyro: itg3701::Itg3701<impl embedded_hal_async::i2c::I2c>) {
//! use itg3701::gyro::{GyroConfig, GyroScale};
//!
//! // Configure with default settings
//! gyro.begin(GyroConfig::default()).await.unwrap();
//!
//! // Or pick a wider range
//! let config = GyroConfig { scale: GyroScale::Dps2000, ..Default::default() };
//! gyro.begin(config).await.unwrap();
//!
//! // Poll
//! let rate = gyro.sample().await.unwrap();
//! println!("Gyro: x={}, y={}, z={}", rate.x, rate.y, rate.z);
//! # }
//! ```

use embedded_hal_async::i2c::*;
use micromath::vector::Vector3d;

use crate::{
  defs::*,
  interrupt::{IntEnable, IntPinConfig},
  power::PowerManagement,
  types::decode_xyz,
  Error, Itg3701,
};

impl<I, E> Itg3701<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Wake the device and program it into a known operating state.
  ///
  /// Writes, in order: `PWR_MGMT_1` (awake), `PWR_MGMT_1` (PLL clock),
  /// `CONFIG`, `SMPLRT_DIV`, then the full-scale bits of `GYRO_CONFIG` (see
  /// [`ScaleWrite`]), `INT_PIN_CFG` and `INT_ENABLE`. The first failed
  /// transaction aborts the sequence and leaves the driver uninitialized.
  pub async fn begin(&mut self, cfg: GyroConfig) -> Result<(), Error<E>> {
    self.config = None;
    debug!("begin: {}", cfg);

    self.write(Reg::PwrMgmt1, PowerManagement::awake()).await?;
    self.write(Reg::PwrMgmt1, PowerManagement::awake_pll()).await?;
    self.write_u8(Reg::Config, DLPF_CFG).await?;
    self.write_u8(Reg::SmplrtDiv, SAMPLE_RATE_DIV).await?;
    self.set_scale(cfg.scale, cfg.scale_write).await?;
    self.write(Reg::IntPinCfg, IntPinConfig::latched()).await?;
    self.write(Reg::IntEnable, IntEnable { data_ready: true, fifo_overflow: false }).await?;

    // The bus handle is initialized by the HAL before it reaches the driver.
    self.config = Some(cfg);
    Ok(())
  }

  async fn set_scale(&mut self, scale: GyroScale, mode: ScaleWrite) -> Result<(), Error<E>> {
    let c = self.read_u8(Reg::GyroConfig).await?;
    let fs_sel = u8::from(scale) << FS_SEL_SHIFT;
    match mode {
      ScaleWrite::Sequential => {
        // Each write starts from the byte read above, so only the last one
        // decides the final register content.
        self.write_u8(Reg::GyroConfig, c & !FCHOICE_B_SEQ_CLEAR).await?;
        self.write_u8(Reg::GyroConfig, c & !FS_SEL_MASK).await?;
        self.write_u8(Reg::GyroConfig, c | fs_sel).await
      }
      ScaleWrite::Folded => {
        self.write_u8(Reg::GyroConfig, (c & !(FCHOICE_B_MASK | FS_SEL_MASK)) | fs_sel).await
      }
    }
  }

  /// Read the current `GYRO_CONFIG` register.
  pub async fn get_gyro_conf(&mut self) -> Result<GyroConfigReg, Error<E>> {
    self.read(Reg::GyroConfig).await
  }

  /// Read the six output registers and refresh the cached reading.
  ///
  /// Works before [`begin`](Self::begin) too; the device then reports
  /// whatever its output registers hold.
  pub async fn sample(&mut self) -> Result<Vector3d<i16>, Error<E>> {
    if self.config.is_none() {
      warn!("sample before begin");
    }
    let mut b = [0u8; 6];
    self.read_bytes(Reg::GyroXoutH, &mut b).await?;
    self.gyro = decode_xyz(&b);
    Ok(self.gyro)
  }
}

/// Settings applied by [`Itg3701::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
  /// Full-scale range.
  pub scale: GyroScale,
  /// Output data rate. Recorded only, see [`Itg3701::APPLIES_RATE_AND_BANDWIDTH`].
  pub rate: GyroRate,
  /// Filter bandwidth. Recorded only, see [`Itg3701::APPLIES_RATE_AND_BANDWIDTH`].
  pub bandwidth: Bandwidth,
  /// How the full-scale bits reach `GYRO_CONFIG`.
  pub scale_write: ScaleWrite,
}

/// How [`Itg3701::begin`] updates `GYRO_CONFIG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleWrite {
  /// Three writes (clear `FCHOICE_B` bit 1, clear `FS_SEL`, set `FS_SEL`),
  /// each derived from the byte read before the first one. Whatever was in
  /// `FCHOICE_B` and `FS_SEL` stays set and is OR-ed with the new scale.
  /// The bus traffic matches the long-standing Arduino driver byte for byte.
  #[default]
  Sequential,
  /// One write with `FCHOICE_B` cleared and `FS_SEL` replaced.
  Folded,
}

/// Gyroscope full-scale ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroScale {
  /// ±500 degrees per second
  #[default]
  Dps500 = 0,
  /// ±1000 degrees per second
  Dps1000 = 1,
  /// ±2000 degrees per second
  Dps2000 = 2,
  /// ±4000 degrees per second
  Dps4000 = 3,
}

impl GyroScale {
  pub fn dps(&self) -> u16 {
    match self {
      GyroScale::Dps500 => 500,
      GyroScale::Dps1000 => 1000,
      GyroScale::Dps2000 => 2000,
      GyroScale::Dps4000 => 4000,
    }
  }
}

impl From<GyroScale> for u8 {
  fn from(value: GyroScale) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for GyroScale {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(GyroScale::Dps500),
      1 => Ok(GyroScale::Dps1000),
      2 => Ok(GyroScale::Dps2000),
      3 => Ok(GyroScale::Dps4000),
      _ => Err(()),
    }
  }
}

/// Output data rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRate {
  #[default]
  Hz95,
  Hz190,
  Hz380,
  Hz760,
}

impl GyroRate {
  pub fn hz(&self) -> u16 {
    match self {
      GyroRate::Hz95 => 95,
      GyroRate::Hz190 => 190,
      GyroRate::Hz380 => 380,
      GyroRate::Hz760 => 760,
    }
  }
}

/// Filter bandwidth. The cutoff depends on the output data rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
  #[default]
  Low,
  Medium,
  High,
  Highest,
}

impl Bandwidth {
  /// Cutoff frequency in Hz at `rate`. `None` for 380 Hz, which has no
  /// documented cutoffs.
  pub fn cutoff_hz(&self, rate: GyroRate) -> Option<f32> {
    let hz = match (rate, self) {
      (GyroRate::Hz95, Bandwidth::Low) => 12.5,
      (GyroRate::Hz95, _) => 25.0,
      (GyroRate::Hz190, Bandwidth::Low) => 12.5,
      (GyroRate::Hz190, Bandwidth::Medium) => 25.0,
      (GyroRate::Hz190, Bandwidth::High) => 50.0,
      (GyroRate::Hz190, Bandwidth::Highest) => 70.0,
      (GyroRate::Hz380, _) => return None,
      (GyroRate::Hz760, Bandwidth::Low) => 30.0,
      (GyroRate::Hz760, Bandwidth::Medium) => 35.0,
      (GyroRate::Hz760, Bandwidth::High) => 50.0,
      (GyroRate::Hz760, Bandwidth::Highest) => 100.0,
    };
    Some(hz)
  }
}

/// `GYRO_CONFIG` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct GyroConfigReg {
  /// DLPF bypass. 0 means the `CONFIG` filter setting is in effect.
  #[bits(2)]
  pub fchoice_b: u8,
  #[skip(1)]
  #[bits(2)]
  pub scale: GyroScale,
  #[bits(1)]
  pub z_self_test: bool,
  #[bits(1)]
  pub y_self_test: bool,
  #[bits(1)]
  pub x_self_test: bool,
}
