//! In-memory stand-in for an ITG-3701 on an I2C bus.

#![allow(dead_code)]

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

/// One bus transaction as seen by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
  Write { addr: u8, bytes: Vec<u8> },
  WriteRead { addr: u8, bytes: Vec<u8>, len: usize },
}

impl Transfer {
  pub fn write(addr: u8, reg: u8, value: u8) -> Self {
    Transfer::Write { addr, bytes: vec![reg, value] }
  }

  pub fn write_read(addr: u8, reg: u8, len: usize) -> Self {
    Transfer::WriteRead { addr, bytes: vec![reg], len }
  }
}

/// Register file behind a 7-bit address.
///
/// The first written byte of a transaction sets the register pointer (MSB
/// ignored), later bytes are stored at the pointer and reads are served from
/// it, auto-incrementing in both cases.
pub struct FakeBus {
  pub regs: [u8; 256],
  pub log: Vec<Transfer>,
  /// Refuse every transaction once this many have completed.
  pub fail_after: Option<usize>,
  address: u8,
}

impl FakeBus {
  pub fn new(address: u8) -> Self {
    let mut regs = [0u8; 256];
    regs[0x6B] = 0x40; // asleep after power-on
    regs[0x75] = 0x68;
    Self { regs, log: Vec::new(), fail_after: None, address }
  }

  pub fn with_regs(mut self, start: u8, bytes: &[u8]) -> Self {
    let start = start as usize;
    self.regs[start..start + bytes.len()].copy_from_slice(bytes);
    self
  }

  pub fn writes_to(&self, reg: u8) -> Vec<u8> {
    self
      .log
      .iter()
      .filter_map(|t| match t {
        Transfer::Write { bytes, .. } if bytes.first() == Some(&reg) => bytes.get(1).copied(),
        _ => None,
      })
      .collect()
  }
}

impl ErrorType for FakeBus {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for FakeBus {
  async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    if address != self.address {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }
    if self.fail_after.is_some_and(|n| self.log.len() >= n) {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
    }

    let mut written = Vec::new();
    let mut read_len = 0;
    let mut ptr = 0usize;
    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => {
          for &b in bytes.iter() {
            if written.is_empty() {
              ptr = (b & 0x7F) as usize;
            } else {
              self.regs[ptr] = b;
              ptr = (ptr + 1) % 256;
            }
            written.push(b);
          }
        }
        Operation::Read(buf) => {
          for slot in buf.iter_mut() {
            *slot = self.regs[ptr];
            ptr = (ptr + 1) % 256;
          }
          read_len += buf.len();
        }
      }
    }

    self.log.push(if read_len == 0 {
      Transfer::Write { addr: address, bytes: written }
    } else {
      Transfer::WriteRead { addr: address, bytes: written, len: read_len }
    });
    Ok(())
  }
}
