use micromath::vector::Vector3d;

use crate::defs::{ADDR_I2C_PRIM, ADDR_I2C_SEC};

/// 7-bit bus address, selected by the AD0 strap pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
  /// AD0 low, 0x68
  #[default]
  Primary,
  /// AD0 high, 0x69
  Secondary,
}

impl From<Address> for u8 {
  fn from(value: Address) -> Self {
    match value {
      Address::Primary => ADDR_I2C_PRIM,
      Address::Secondary => ADDR_I2C_SEC,
    }
  }
}

impl TryFrom<u8> for Address {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      ADDR_I2C_PRIM => Ok(Address::Primary),
      ADDR_I2C_SEC => Ok(Address::Secondary),
      _ => Err(()),
    }
  }
}

/// Driver lifecycle. `sample` is only meaningful once `Configured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
  Uninitialized,
  Configured,
}

/// Decode the 6 output bytes (X, Y, Z; high byte first) into raw counts.
pub(crate) fn decode_xyz(b: &[u8; 6]) -> Vector3d<i16> {
  Vector3d {
    x: i16::from_be_bytes([b[0], b[1]]),
    y: i16::from_be_bytes([b[2], b[3]]),
    z: i16::from_be_bytes([b[4], b[5]]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_extremes() {
    assert_eq!(i16::from_be_bytes([0x7F, 0xFF]), 32767);
    let v = decode_xyz(&[0x7F, 0xFF, 0x80, 0x00, 0x00, 0x00]);
    assert_eq!((v.x, v.y, v.z), (32767, -32768, 0));
  }

  #[test]
  fn decode_axis_order() {
    let v = decode_xyz(&[0x01, 0x00, 0xFE, 0x00, 0x00, 0x01]);
    assert_eq!(v.x, 256);
    assert_eq!(v.y, -512);
    assert_eq!(v.z, 1);
  }

  #[test]
  fn decode_minus_one() {
    let v = decode_xyz(&[0xFF, 0xFF, 0xFF, 0xFE, 0x12, 0x34]);
    assert_eq!((v.x, v.y, v.z), (-1, -2, 0x1234));
  }

  #[test]
  fn address_conversion() {
    assert_eq!(u8::from(Address::default()), 0x68);
    assert_eq!(u8::from(Address::Secondary), 0x69);
    assert_eq!(Address::try_from(0x69), Ok(Address::Secondary));
    assert_eq!(Address::try_from(0x6A), Err(()));
  }
}
