//! Strongly typed parameter values for the IPS2550 driver.
//!
//! These types map directly to the device's register field encodings and are
//! used across the high-level driver APIs. Prefer them over raw integers to
//! keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use ips2550::params::{OffsetSign, OffsetTrim, OutputMode, Vdd};
//!
//! let vdd = Vdd::Vdd3V3;
//! let trim = OffsetTrim::new(OffsetSign::Negative, 12);
//! let _ = (vdd, trim, OutputMode::Differential);
//! ```

/// Supply voltage selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Vdd {
    /// 3.3 V supply.
    Vdd3V3 = 0,
    /// 5.0 V supply.
    Vdd5V0 = 1,
}

impl Vdd {
    /// Returns the register field encoding.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Decodes the register field value.
    pub const fn from_code(code: u16) -> Self {
        if code == 0 { Self::Vdd3V3 } else { Self::Vdd5V0 }
    }

    /// Returns the nominal supply voltage in millivolts.
    pub const fn millivolts(self) -> u32 {
        match self {
            Self::Vdd3V3 => 3_300,
            Self::Vdd5V0 => 5_000,
        }
    }
}

/// Receiver output driver modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputMode {
    /// Differential outputs.
    Differential = 0,
    /// Single-ended outputs.
    SingleEnded = 1,
}

impl OutputMode {
    /// Returns the register field encoding.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Decodes the register field value.
    pub const fn from_code(code: u16) -> Self {
        if code == 0 {
            Self::Differential
        } else {
            Self::SingleEnded
        }
    }
}

/// Polarity of an output offset trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OffsetSign {
    /// Offset subtracts from the output.
    Negative = 0,
    /// Offset adds to the output.
    Positive = 1,
}

/// One receiver channel's offset trim: a polarity and a 7-bit magnitude code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTrim {
    /// Trim polarity (register bit 7).
    pub sign: OffsetSign,
    /// Magnitude code (register bits 6:0).
    pub code: u8,
}

impl OffsetTrim {
    /// Creates a trim, clamping the magnitude code to its 7-bit range.
    pub const fn new(sign: OffsetSign, code: u8) -> Self {
        let code = if code > 0x7F { 0x7F } else { code };
        Self { sign, code }
    }

    /// Packs the trim into its 8-bit register field.
    pub const fn bits(self) -> u16 {
        ((self.sign as u16) << 7) | (self.code as u16)
    }

    /// Unpacks a trim from its 8-bit register field.
    pub const fn from_bits(bits: u16) -> Self {
        let sign = if bits & 0x80 != 0 {
            OffsetSign::Positive
        } else {
            OffsetSign::Negative
        };
        Self {
            sign,
            code: (bits & 0x7F) as u8,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OffsetTrim {
    fn format(&self, f: defmt::Formatter) {
        let sign = match self.sign {
            OffsetSign::Negative => '-',
            OffsetSign::Positive => '+',
        };
        defmt::write!(f, "OffsetTrim({}{})", sign, self.code);
    }
}
