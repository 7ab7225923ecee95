//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Ips2550Interface;
use crate::codec::address_parity;

/// Write framing revisions seen across device firmware generations.
///
/// Reads are framed identically under both revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteProtocol {
    /// One transaction carrying the register header and both codeword bytes.
    #[default]
    Single,
    /// The register header goes out as its own leading transaction, tagged
    /// in its top bit with the even-parity bit of the bus address, followed
    /// by the codeword transaction.
    ParityTagged,
}

/// I²C-based interface implementation for the IPS2550 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    protocol: WriteProtocol,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface for the device at `address`, using the
    /// single-transaction write framing.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self::with_protocol(i2c, address, WriteProtocol::Single)
    }

    /// Creates a new interface with an explicit write framing revision.
    pub const fn with_protocol(i2c: I2C, address: u8, protocol: WriteProtocol) -> Self {
        Self {
            i2c,
            address,
            protocol,
        }
    }

    /// Returns the 7-bit bus address the interface talks to.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Returns the active write framing revision.
    pub const fn protocol(&self) -> WriteProtocol {
        self.protocol
    }

    /// Provides mutable access to the wrapped I²C peripheral.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Builds the register header byte for the active write framing.
    fn write_header(&self, register: u8) -> u8 {
        let register = register & 0x7F;
        match self.protocol {
            WriteProtocol::Single => register,
            WriteProtocol::ParityTagged => register | ((address_parity(self.address) as u8) << 7),
        }
    }
}

impl<I2C> Ips2550Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_frame(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error> {
        let mut frame = [0u8; 2];
        self.i2c.write(self.address, &[register & 0x7F])?;
        self.i2c.read(self.address, &mut frame)?;
        Ok(frame)
    }

    fn write_frame(
        &mut self,
        register: u8,
        codeword: [u8; 2],
    ) -> core::result::Result<(), Self::Error> {
        let header = self.write_header(register);
        match self.protocol {
            WriteProtocol::Single => {
                let frame = [header, codeword[0], codeword[1]];
                self.i2c.write(self.address, &frame)
            }
            WriteProtocol::ParityTagged => {
                self.i2c.write(self.address, &[header])?;
                self.i2c.write(self.address, &codeword)
            }
        }
    }
}

#[cfg(feature = "async")]
impl<I2C> super::Ips2550AsyncInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Error = I2C::Error;

    async fn read_frame(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error> {
        let mut frame = [0u8; 2];
        self.i2c.write(self.address, &[register & 0x7F]).await?;
        self.i2c.read(self.address, &mut frame).await?;
        Ok(frame)
    }

    async fn write_frame(
        &mut self,
        register: u8,
        codeword: [u8; 2],
    ) -> core::result::Result<(), Self::Error> {
        let header = self.write_header(register);
        match self.protocol {
            WriteProtocol::Single => {
                let frame = [header, codeword[0], codeword[1]];
                self.i2c.write(self.address, &frame).await
            }
            WriteProtocol::ParityTagged => {
                self.i2c.write(self.address, &[header]).await?;
                self.i2c.write(self.address, &codeword).await
            }
        }
    }
}
