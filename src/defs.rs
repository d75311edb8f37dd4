#![allow(dead_code)]

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reg {
  XgOffsTcH = 0x04,
  XgOffsTcL = 0x05,
  YgOffsTcH = 0x07,
  YgOffsTcL = 0x08,
  ZgOffsTcH = 0x0A,
  ZgOffsTcL = 0x0B,
  XgOffsUsrH = 0x13,
  XgOffsUsrL = 0x14,
  YgOffsUsrH = 0x15,
  YgOffsUsrL = 0x16,
  ZgOffsUsrH = 0x17,
  ZgOffsUsrL = 0x18,
  SmplrtDiv = 0x19,
  Config = 0x1A,
  GyroConfig = 0x1B,
  FifoEn = 0x23,
  IntPinCfg = 0x37,
  IntEnable = 0x38,
  IntStatus = 0x3A,
  TempOutH = 0x41,
  TempOutL = 0x42,
  GyroXoutH = 0x43,
  GyroXoutL = 0x44,
  GyroYoutH = 0x45,
  GyroYoutL = 0x46,
  GyroZoutH = 0x47,
  GyroZoutL = 0x48,
  UserCtrl = 0x6A,
  PwrMgmt1 = 0x6B,
  PwrMgmt2 = 0x6C,
  FifoCountH = 0x72,
  FifoCountL = 0x73,
  FifoRw = 0x74,
  WhoAmI = 0x75,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

// Identity
pub(crate) const ITG3701_CHIP_ID: u8 = 0x68;

// Bus addresses (AD0 strap low / high)
pub(crate) const ADDR_I2C_PRIM: u8 = 0x68;
pub(crate) const ADDR_I2C_SEC: u8 = 0x69;

// Set on the register byte of a burst read.
pub(crate) const MULTI_READ: u8 = 0x80;

// Fixed values programmed by `begin`.
pub(crate) const DLPF_CFG: u8 = 0x03;
pub(crate) const SAMPLE_RATE_DIV: u8 = 0x04;

// GYRO_CONFIG fields
pub(crate) const FCHOICE_B_MASK: u8 = 0x03;
// Bit cleared by the first write of `ScaleWrite::Sequential`.
pub(crate) const FCHOICE_B_SEQ_CLEAR: u8 = 0x02;
pub(crate) const FS_SEL_MASK: u8 = 0x18;
pub(crate) const FS_SEL_SHIFT: u8 = 3;
