//! Bus interface abstraction for the IPS2550 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// One frame is the 2-byte codeword of a single register transaction; the
/// codec above this trait owns its bit layout.
pub trait Ips2550Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Reads the codeword of a register, high byte first.
    fn read_frame(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error>;

    /// Writes a register codeword, high byte first.
    fn write_frame(
        &mut self,
        register: u8,
        codeword: [u8; 2],
    ) -> core::result::Result<(), Self::Error>;
}

/// Asynchronous twin of [`Ips2550Interface`].
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Ips2550AsyncInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Reads the codeword of a register, high byte first.
    async fn read_frame(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error>;

    /// Writes a register codeword, high byte first.
    async fn write_frame(
        &mut self,
        register: u8,
        codeword: [u8; 2],
    ) -> core::result::Result<(), Self::Error>;
}
