use embedded_hal_async::i2c::*;

use crate::{defs::*, Error, Itg3701};

impl<I, E> Itg3701<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub(crate) async fn read<const N: usize, T: TryFrom<[u8; N]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; N];
    match b.as_mut_slice() {
      [only] => *only = self.read_u8(reg).await?,
      buf => self.read_bytes(reg, buf).await?,
    }
    TryFrom::try_from(b).map_err(|_| Error::Data)
  }

  pub(crate) async fn write<T: TryInto<[u8; 1]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let [value] = v.try_into().map_err(|_| Error::Data)?;
    self.write_u8(reg, value).await
  }

  /// Single register write: address byte then value, closed with a stop.
  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    trace!("write {:#x} <- {:#x}", u8::from(reg), value);
    self.i2c.write(self.address, &[reg.into(), value]).await.map_err(Error::I2c)
  }

  /// Single register read. The register address and the read are joined by
  /// a repeated start.
  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.i2c.write_read(self.address, &[reg.into()], &mut b).await.map_err(Error::I2c)?;
    trace!("read {:#x} -> {:#x}", u8::from(reg), b[0]);
    Ok(b[0])
  }

  /// Burst read of `buf.len()` consecutive registers starting at `reg`.
  ///
  /// The register byte goes out with its MSB set to flag a multi-byte read.
  /// The transport fills the whole buffer; no length check is made on top.
  pub(crate) async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let start = u8::from(reg) | MULTI_READ;
    self.i2c.write_read(self.address, &[start], buf).await.map_err(Error::I2c)?;
    trace!("burst read {:#x} ({} bytes)", start, buf.len());
    Ok(())
  }
}
