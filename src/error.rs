//! Error handling primitives for the IPS2550 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A single register read failed its checksum validation.
    ChecksumMismatch,
    /// No clean register response within the configured retry budget.
    DeviceUnresponsive,
    /// A field mask was zero or not one contiguous run of bits.
    InvalidMask,
    /// The device reported a master gain code outside the documented table.
    UnknownGainCode(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
