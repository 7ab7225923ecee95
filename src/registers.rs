//! Register map definitions for the IPS2550 analog front end.
//!
//! Every configuration register lives twice on the device: once in the live
//! bank below and once mirrored in the shadow bank at [`SHADOW_BANK`] above
//! it. Setters program both copies; readbacks use the live bank.

/// Register address of the mode control register (output mode, AGC).
pub const REG_MODE_CTRL: u8 = 0x00;
/// Register address of the supply configuration register.
pub const REG_SUPPLY_CFG: u8 = 0x01;
/// Register address of the master gain register.
pub const REG_MASTER_GAIN: u8 = 0x02;
/// Register address of the receiver channel 1 fine gain register.
pub const REG_FINE_GAIN_1: u8 = 0x03;
/// Register address of the receiver channel 1 offset trim register.
pub const REG_OFFSET_1: u8 = 0x04;
/// Register address of the receiver channel 2 fine gain register.
pub const REG_FINE_GAIN_2: u8 = 0x05;
/// Register address of the receiver channel 2 offset trim register.
pub const REG_OFFSET_2: u8 = 0x06;
/// Register address of the transmitter current bias register.
pub const REG_TX_BIAS: u8 = 0x07;

/// Address offset separating the shadow register bank from the live bank.
pub const SHADOW_BANK: u8 = 0x40;

/// Returns the shadow-bank mirror of a register address.
pub const fn shadow_register(register: u8) -> u8 {
    register | SHADOW_BANK
}

/// Output mode selector, bit 1 of the mode control register.
pub const MASK_OUTPUT_MODE: u16 = 0x0002;
/// Automatic gain control disable flag, bit 9 of the mode control register.
pub const MASK_AGC_DISABLE: u16 = 0x0200;
/// Supply voltage selector, bit 0 of the supply configuration register.
pub const MASK_VDD: u16 = 0x0001;
/// Master gain code, bits 6:0 of the master gain register.
pub const MASK_MASTER_GAIN_CODE: u16 = 0x007F;
/// Master gain boost flag, bit 7 of the master gain register.
pub const MASK_MASTER_GAIN_BOOST: u16 = 0x0080;
/// Fine gain code, bits 6:0 of either fine gain register.
pub const MASK_FINE_GAIN: u16 = 0x007F;
/// Full offset trim field, sign and magnitude, bits 7:0.
pub const MASK_OFFSET_TRIM: u16 = 0x00FF;
/// Offset trim magnitude code, bits 6:0 of either offset register.
pub const MASK_OFFSET_CODE: u16 = 0x007F;
/// Offset trim sign, bit 7 of either offset register.
pub const MASK_OFFSET_SIGN: u16 = 0x0080;
/// Transmitter current bias code, bits 7:0 of the bias register.
pub const MASK_TX_BIAS: u16 = 0x00FF;

/// Highest master gain code with a documented gain factor.
pub const MAX_MASTER_GAIN_CODE: u8 = 95;

/// Linear gain factor for each master gain code.
pub const GAIN_FACTORS: [f32; 96] = [
    2.0, 2.1, 2.18, 2.29, 2.38, 2.5, 2.59, 2.72, 2.83, 2.97, //
    3.09, 3.24, 3.36, 3.53, 3.67, 3.85, 4.0, 4.2, 4.36, 4.58, //
    4.76, 4.99, 5.19, 5.45, 5.66, 5.94, 6.17, 6.48, 6.73, 7.06, //
    7.34, 7.7, 8.0, 8.4, 8.72, 9.16, 9.51, 9.99, 10.38, 10.89, //
    11.31, 11.88, 12.34, 12.96, 13.46, 14.13, 14.67, 15.41, 16.0, 16.8, //
    17.45, 18.32, 19.02, 19.98, 20.75, 21.79, 22.62, 23.76, 24.68, 25.91, //
    26.91, 28.26, 29.34, 30.81, 32.0, 33.6, 34.9, 36.64, 38.05, 39.95, //
    41.5, 43.58, 45.25, 47.51, 49.36, 51.83, 53.82, 56.52, 58.69, 61.62, //
    64.0, 67.2, 69.79, 73.28, 76.1, 79.9, 83.01, 87.16, 90.5, 95.02, //
    98.72, 103.66, 107.65, 113.03, 117.38, 123.24,
];

/// Linear gain factor for a master gain code, or `None` beyond the table.
pub const fn master_gain_factor(code: u8) -> Option<f32> {
    if code as usize >= GAIN_FACTORS.len() {
        return None;
    }
    Some(GAIN_FACTORS[code as usize])
}
