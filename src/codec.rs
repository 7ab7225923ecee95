//! Wire codec for checksum-protected register transactions.
//!
//! Every register exchange travels as a 16-bit codeword holding an 11-bit
//! register value and 3 check bits, high byte first on the bus. Writes add a
//! fixed framing pattern in bits 4:3; reads come back with those bits clear.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::checksum::{CHECK_GENERATOR, checksum};

/// Framing pattern occupying bits 4:3 of every write codeword.
pub const WRITE_FRAMING: u8 = 0b11;

// The divider operates on the 16-bit codeword window; header bits above it
// do not reach the wire checksum.
const CODEWORD_WINDOW: u32 = 0xFFFF;

/// Bitfield layout of the 16-bit wire codeword.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    // Check bits (bits 2:0).
    pub check: B3,
    // Framing pattern on writes, clear on reads (bits 4:3).
    pub framing: B2,
    // Register value (bits 15:5).
    pub value: B11,
}

impl Codeword {
    /// Returns the codeword in bus order, high byte first.
    pub fn to_wire(self) -> [u8; 2] {
        let bytes = self.into_bytes();
        [bytes[1], bytes[0]]
    }

    /// Parses a codeword received in bus order, high byte first.
    pub fn from_wire(bytes: [u8; 2]) -> Self {
        Self::from_bytes([bytes[1], bytes[0]])
    }
}

impl From<u16> for Codeword {
    fn from(value: u16) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<Codeword> for u16 {
    fn from(value: Codeword) -> Self {
        u16::from_le_bytes(value.into_bytes())
    }
}

/// Builds the scratch word whose division yields a write's check bits.
///
/// The register address header sits above bit 16, the value's upper eight
/// bits fill the middle byte and its low three bits sit at the bottom.
const fn write_check_message(register: u8, value: u16) -> u32 {
    let header = ((register & 0x7F) as u32) << 1;
    let coarse = ((value & 0x07F8) as u32) >> 3;
    let fine = (value & 0x0007) as u32;
    (header << 16) | (coarse << 8) | fine
}

/// Rebuilds the check message covered by a received codeword.
const fn read_check_message(value: u16) -> u32 {
    (((value << 5) & 0xFF00) | (value & 0b111)) as u32
}

/// Packs a register write into its bus framing: the register address header
/// followed by the two codeword bytes, high byte first.
pub fn encode_write(register: u8, value: u16) -> [u8; 3] {
    let message = write_check_message(register, value) & CODEWORD_WINDOW;
    let check = checksum(message, CHECK_GENERATOR, 0) as u8;

    let wire = Codeword::new()
        .with_check(check)
        .with_framing(WRITE_FRAMING)
        .with_value(value & 0x07FF)
        .to_wire();

    [register & 0x7F, wire[0], wire[1]]
}

/// Splits a received codeword into its register value and check bits.
pub fn decode_read(high: u8, low: u8) -> (u16, u8) {
    let codeword = Codeword::from_wire([high, low]);
    (codeword.value(), codeword.check())
}

/// Reruns the division over a received value with its check bits as filler.
/// A clean read divides to zero.
pub fn verify_read(value: u16, check: u8) -> bool {
    checksum(read_check_message(value), CHECK_GENERATOR, check as u32) == 0
}

/// Even-parity bit over the 8-bit wire form of a bus address: the 7-bit
/// address followed by the R/W bit.
pub const fn address_parity(address: u8) -> bool {
    ((address << 1).count_ones() & 1) == 1
}
