//! Power management (`PWR_MGMT_1`).
//!
//! The device comes out of reset asleep. [`Itg3701::begin`](crate::Itg3701::begin)
//! wakes it and selects the PLL clock; [`Itg3701::set_sleep`] can put it back
//! to sleep between bursts of sampling.

use embedded_hal_async::i2c::*;

use crate::{defs::*, Error, Itg3701};

impl<I, E> Itg3701<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub async fn get_power_management(&mut self) -> Result<PowerManagement, Error<E>> {
    self.read(Reg::PwrMgmt1).await
  }

  /// Enter or leave sleep mode, keeping the other `PWR_MGMT_1` fields.
  pub async fn set_sleep(&mut self, sleep: bool) -> Result<(), Error<E>> {
    let mut r: PowerManagement = self.read(Reg::PwrMgmt1).await?;
    r.sleep = sleep;
    r.reset = false;
    debug!("sleep = {}", sleep);
    self.write(Reg::PwrMgmt1, r).await
  }
}

/// `PWR_MGMT_1` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 1)]
pub struct PowerManagement {
  #[bits(3)]
  pub clock: ClockSource,
  /// Disable the temperature sensor.
  #[bits(1)]
  pub temp_disable: bool,
  /// Keep the gyro drive running with sensing disabled.
  #[bits(1)]
  pub gyro_standby: bool,
  /// Alternate between sleep and single samples.
  #[bits(1)]
  pub cycle: bool,
  #[bits(1)]
  pub sleep: bool,
  /// Self-clearing device reset.
  #[bits(1)]
  pub reset: bool,
}

impl PowerManagement {
  /// Awake, all sensors enabled, internal oscillator.
  pub(crate) const fn awake() -> Self {
    Self {
      clock: ClockSource::Internal,
      temp_disable: false,
      gyro_standby: false,
      cycle: false,
      sleep: false,
      reset: false,
    }
  }

  /// Awake, PLL clock selected.
  pub(crate) const fn awake_pll() -> Self {
    Self { clock: ClockSource::AutoPll, ..Self::awake() }
  }
}

/// `CLKSEL` values. Codes 1..=5 and 0/6 select the same source; each code
/// keeps its own variant so a read-modify-write writes back what it read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
  /// Internal 20 MHz oscillator
  #[default]
  Internal = 0,
  /// PLL with the gyro reference when ready, internal oscillator otherwise
  AutoPll = 1,
  AutoPll2 = 2,
  AutoPll3 = 3,
  AutoPll4 = 4,
  AutoPll5 = 5,
  /// Internal 20 MHz oscillator
  Internal6 = 6,
  /// Clock stopped, timing generator held in reset
  Stopped = 7,
}

impl ClockSource {
  /// Whether this code selects the PLL when it is ready.
  pub fn is_pll(&self) -> bool {
    matches!(
      self,
      ClockSource::AutoPll | ClockSource::AutoPll2 | ClockSource::AutoPll3 | ClockSource::AutoPll4 | ClockSource::AutoPll5
    )
  }
}

impl From<ClockSource> for u8 {
  fn from(value: ClockSource) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for ClockSource {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(ClockSource::Internal),
      1 => Ok(ClockSource::AutoPll),
      2 => Ok(ClockSource::AutoPll2),
      3 => Ok(ClockSource::AutoPll3),
      4 => Ok(ClockSource::AutoPll4),
      5 => Ok(ClockSource::AutoPll5),
      6 => Ok(ClockSource::Internal6),
      7 => Ok(ClockSource::Stopped),
      _ => Err(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pack(r: PowerManagement) -> Option<[u8; 1]> {
    r.try_into().ok()
  }

  #[test]
  fn begin_values() {
    assert_eq!(pack(PowerManagement::awake()), Some([0x00]));
    assert_eq!(pack(PowerManagement::awake_pll()), Some([0x01]));
  }

  #[test]
  fn decode_sleeping_reset_value() {
    // Power-on value: asleep, internal oscillator.
    let r = PowerManagement::try_from([0x40]).ok().unwrap();
    assert!(r.sleep);
    assert!(!r.reset);
    assert_eq!(r.clock, ClockSource::Internal);
  }

  #[test]
  fn sleep_bit_position() {
    let r = PowerManagement { sleep: true, ..PowerManagement::awake_pll() };
    assert_eq!(pack(r), Some([0x41]));
  }

  #[test]
  fn every_clock_code_round_trips() {
    // Every value with the reset bit clear.
    for v in 0u8..0x80 {
      let r = PowerManagement::try_from([v]).ok().unwrap();
      assert_eq!(pack(r), Some([v]));
    }
    assert!(ClockSource::AutoPll3.is_pll());
    assert!(!ClockSource::Internal6.is_pll());
  }
}
