//! High-level IPS2550 device driver implementation.

use crate::bits::lowest_set_bit;
use crate::codec::{decode_read, encode_write, verify_read};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Ips2550Interface;
use crate::log::{debug, trace, warn};
use crate::params::{OffsetTrim, OutputMode, Vdd};
use crate::registers::{
    master_gain_factor,
    shadow_register,
    MASK_AGC_DISABLE,
    MASK_FINE_GAIN,
    MASK_MASTER_GAIN_BOOST,
    MASK_MASTER_GAIN_CODE,
    MASK_OFFSET_TRIM,
    MASK_OUTPUT_MODE,
    MASK_TX_BIAS,
    MASK_VDD,
    MAX_MASTER_GAIN_CODE,
    REG_FINE_GAIN_1,
    REG_FINE_GAIN_2,
    REG_MASTER_GAIN,
    REG_MODE_CTRL,
    REG_OFFSET_1,
    REG_OFFSET_2,
    REG_SUPPLY_CFG,
    REG_TX_BIAS,
};
use embedded_hal::delay::DelayNs;

#[cfg(feature = "async")]
use crate::interface::Ips2550AsyncInterface;
#[cfg(feature = "async")]
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

// Fine gain codes occupy a 7-bit register field.
const MAX_FINE_GAIN_CODE: u8 = 0x7F;

/// High-level synchronous driver for the IPS2550 front end.
pub struct Ips2550<IFACE> {
    interface: IFACE,
    config: Config,
}

// A field mask must select exactly one contiguous run of bits.
fn validate_field_mask<E>(mask: u16) -> Result<(), E> {
    if mask == 0 {
        return Err(Error::InvalidMask);
    }

    let aligned = (mask as u32) >> lowest_set_bit(mask as u32);
    if aligned & (aligned + 1) != 0 {
        return Err(Error::InvalidMask);
    }

    Ok(())
}

impl<IFACE> Ips2550<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl<I2C> Ips2550<I2cInterface<I2C>> {
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, address: u8, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I²C peripheral and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Ips2550<IFACE>
where
    IFACE: Ips2550Interface<Error = CommE>,
{
    // ==================================================================
    // == Register Access & Integrity ===================================
    // ==================================================================
    /// Reads a register value, retrying while responses fail validation.
    ///
    /// A corrupted response settles for [`Config::retry_settle_ms`] before the
    /// next attempt. Once [`Config::read_attempts`] responses have failed in a
    /// row the device counts as unresponsive.
    pub fn read_register(&mut self, register: u8, delay: &mut impl DelayNs) -> Result<u16, CommE> {
        let attempts = self.config.read_attempts.max(1);

        for attempt in 1..=attempts {
            match self.read_register_once(register) {
                Ok(value) => return Ok(value),
                Err(Error::ChecksumMismatch) => {
                    debug!(
                        "register {} failed its checksum on attempt {}",
                        register, attempt
                    );
                    if attempt < attempts {
                        delay.delay_ms(self.config.retry_settle_ms);
                    }
                }
                Err(err) => return Err(err),
            }
        }

        warn!("register {} unresponsive after {} attempts", register, attempts);
        Err(Error::DeviceUnresponsive)
    }

    /// Reads a register value once, without the retry loop.
    ///
    /// Surfaces [`Error::ChecksumMismatch`] when the response fails its
    /// validation instead of retrying.
    pub fn read_register_once(&mut self, register: u8) -> Result<u16, CommE> {
        let frame = self
            .interface
            .read_frame(register)
            .map_err(Error::from)?;

        let (value, check) = decode_read(frame[0], frame[1]);
        if !verify_read(value, check) {
            return Err(Error::ChecksumMismatch);
        }

        trace!("register {} read {}", register, value);
        Ok(value)
    }

    /// Writes an 11-bit value to a register.
    pub fn write_register(&mut self, register: u8, value: u16) -> Result<(), CommE> {
        let frame = encode_write(register, value);

        trace!("register {} write {}", register, value);
        self
            .interface
            .write_frame(frame[0], [frame[1], frame[2]])
            .map_err(Error::from)
    }

    // ==================================================================
    // == Masked Field Access ===========================================
    // ==================================================================
    /// Reads a register field, right-aligned to the mask's lowest set bit.
    pub fn read_field(
        &mut self,
        register: u8,
        mask: u16,
        delay: &mut impl DelayNs,
    ) -> Result<u16, CommE> {
        validate_field_mask(mask)?;

        let value = self.read_register(register, delay)?;
        Ok((value & mask) >> lowest_set_bit(mask as u32))
    }

    /// Rewrites the masked bits of a register, leaving the others untouched.
    ///
    /// `value` is taken in register position, not right-aligned.
    pub fn write_field(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        validate_field_mask(mask)?;

        let current = self.read_register(register, delay)?;
        self.write_register(register, (current & !mask) | (value & mask))
    }

    /// Rewrites a field in the shadow-bank register and then in its live
    /// mirror, with a settle delay of [`Config::write_settle_ms`] after each
    /// write.
    pub fn write_mirrored_field(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        validate_field_mask(mask)?;

        self.write_field_settled(shadow_register(register), mask, value, delay)?;
        self.write_field_settled(register, mask, value, delay)
    }

    fn write_field_settled(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        let current = self.read_register(register, delay)?;
        self.write_register(register, (current & !mask) | (value & mask))?;
        delay.delay_ms(self.config.write_settle_ms);

        Ok(())
    }

    // ==================================================================
    // == Analog Front End Configuration ================================
    // ==================================================================
    /// Selects the supply voltage the front end compensates for.
    pub fn set_supply_voltage(&mut self, vdd: Vdd, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.write_mirrored_field(REG_SUPPLY_CFG, MASK_VDD, vdd.code(), delay)
    }

    /// Selects the receiver output driver mode.
    pub fn set_output_mode(
        &mut self,
        mode: OutputMode,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field(REG_MODE_CTRL, MASK_OUTPUT_MODE, mode.code() << 1, delay)
    }

    /// Enables or disables automatic gain control.
    pub fn set_automatic_gain_control(
        &mut self,
        enabled: bool,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        // The register field is a disable flag (bit 9).
        let disable = !enabled as u16;
        self.write_mirrored_field(REG_MODE_CTRL, MASK_AGC_DISABLE, disable << 9, delay)
    }

    /// Programs the master gain code, clamped to [`MAX_MASTER_GAIN_CODE`].
    pub fn set_master_gain_code(
        &mut self,
        code: u8,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        let code = code.min(MAX_MASTER_GAIN_CODE) as u16;
        self.write_mirrored_field(REG_MASTER_GAIN, MASK_MASTER_GAIN_CODE, code, delay)
    }

    /// Enables or disables the master gain boost stage.
    pub fn set_master_gain_boost(
        &mut self,
        boost: bool,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        let boost = boost as u16;
        self.write_mirrored_field(REG_MASTER_GAIN, MASK_MASTER_GAIN_BOOST, boost << 7, delay)
    }

    /// Programs the receiver channel 1 fine gain code, clamped to 7 bits.
    pub fn set_fine_gain_1(&mut self, code: u8, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let code = code.min(MAX_FINE_GAIN_CODE) as u16;
        self.write_mirrored_field(REG_FINE_GAIN_1, MASK_FINE_GAIN, code, delay)
    }

    /// Programs the receiver channel 2 fine gain code, clamped to 7 bits.
    pub fn set_fine_gain_2(&mut self, code: u8, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let code = code.min(MAX_FINE_GAIN_CODE) as u16;
        self.write_mirrored_field(REG_FINE_GAIN_2, MASK_FINE_GAIN, code, delay)
    }

    /// Programs the receiver channel 1 offset trim.
    pub fn set_offset_1(
        &mut self,
        trim: OffsetTrim,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field(REG_OFFSET_1, MASK_OFFSET_TRIM, trim.bits(), delay)
    }

    /// Programs the receiver channel 2 offset trim.
    pub fn set_offset_2(
        &mut self,
        trim: OffsetTrim,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field(REG_OFFSET_2, MASK_OFFSET_TRIM, trim.bits(), delay)
    }

    /// Programs the transmitter current bias code.
    pub fn set_tx_current_bias(&mut self, code: u8, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.write_mirrored_field(REG_TX_BIAS, MASK_TX_BIAS, code as u16, delay)
    }

    // ==================================================================
    // == Analog Front End Readback =====================================
    // ==================================================================
    /// Reads back the supply voltage selection.
    pub fn read_supply_voltage(&mut self, delay: &mut impl DelayNs) -> Result<Vdd, CommE> {
        let code = self.read_field(REG_SUPPLY_CFG, MASK_VDD, delay)?;
        Ok(Vdd::from_code(code))
    }

    /// Reads back the receiver output driver mode.
    pub fn read_output_mode(&mut self, delay: &mut impl DelayNs) -> Result<OutputMode, CommE> {
        let code = self.read_field(REG_MODE_CTRL, MASK_OUTPUT_MODE, delay)?;
        Ok(OutputMode::from_code(code))
    }

    /// Reads back whether automatic gain control is enabled.
    pub fn read_automatic_gain_control(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<bool, CommE> {
        let disable = self.read_field(REG_MODE_CTRL, MASK_AGC_DISABLE, delay)?;
        Ok(disable == 0)
    }

    /// Reads back the raw master gain code.
    pub fn read_master_gain_code(&mut self, delay: &mut impl DelayNs) -> Result<u8, CommE> {
        let code = self.read_field(REG_MASTER_GAIN, MASK_MASTER_GAIN_CODE, delay)?;
        Ok(code as u8)
    }

    /// Reads back whether the master gain boost stage is enabled.
    pub fn read_master_gain_boost(&mut self, delay: &mut impl DelayNs) -> Result<bool, CommE> {
        let boost = self.read_field(REG_MASTER_GAIN, MASK_MASTER_GAIN_BOOST, delay)?;
        Ok(boost != 0)
    }

    /// Reads back the linear gain factor selected by the master gain code.
    ///
    /// The boost stage is reported separately by
    /// [`Self::read_master_gain_boost`]. A code beyond the documented table
    /// yields [`Error::UnknownGainCode`].
    pub fn read_master_gain(&mut self, delay: &mut impl DelayNs) -> Result<f32, CommE> {
        let code = self.read_master_gain_code(delay)?;
        master_gain_factor(code).ok_or(Error::UnknownGainCode(code))
    }

    /// Reads back the receiver channel 1 fine gain code.
    pub fn read_fine_gain_1(&mut self, delay: &mut impl DelayNs) -> Result<u8, CommE> {
        let code = self.read_field(REG_FINE_GAIN_1, MASK_FINE_GAIN, delay)?;
        Ok(code as u8)
    }

    /// Reads back the receiver channel 2 fine gain code.
    pub fn read_fine_gain_2(&mut self, delay: &mut impl DelayNs) -> Result<u8, CommE> {
        let code = self.read_field(REG_FINE_GAIN_2, MASK_FINE_GAIN, delay)?;
        Ok(code as u8)
    }

    /// Reads back the receiver channel 1 offset trim.
    pub fn read_offset_1(&mut self, delay: &mut impl DelayNs) -> Result<OffsetTrim, CommE> {
        let bits = self.read_field(REG_OFFSET_1, MASK_OFFSET_TRIM, delay)?;
        Ok(OffsetTrim::from_bits(bits))
    }

    /// Reads back the receiver channel 2 offset trim.
    pub fn read_offset_2(&mut self, delay: &mut impl DelayNs) -> Result<OffsetTrim, CommE> {
        let bits = self.read_field(REG_OFFSET_2, MASK_OFFSET_TRIM, delay)?;
        Ok(OffsetTrim::from_bits(bits))
    }

    /// Reads back the transmitter current bias code.
    pub fn read_tx_current_bias(&mut self, delay: &mut impl DelayNs) -> Result<u8, CommE> {
        let code = self.read_field(REG_TX_BIAS, MASK_TX_BIAS, delay)?;
        Ok(code as u8)
    }
}

#[cfg(feature = "async")]
impl<IFACE, CommE> Ips2550<IFACE>
where
    IFACE: Ips2550AsyncInterface<Error = CommE>,
{
    // ==================================================================
    // == Register Access & Integrity (async) ===========================
    // ==================================================================
    /// Async twin of [`Self::read_register`].
    pub async fn read_register_async(
        &mut self,
        register: u8,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u16, CommE> {
        let attempts = self.config.read_attempts.max(1);

        for attempt in 1..=attempts {
            match self.read_register_once_async(register).await {
                Ok(value) => return Ok(value),
                Err(Error::ChecksumMismatch) => {
                    debug!(
                        "register {} failed its checksum on attempt {}",
                        register, attempt
                    );
                    if attempt < attempts {
                        delay.delay_ms(self.config.retry_settle_ms).await;
                    }
                }
                Err(err) => return Err(err),
            }
        }

        warn!("register {} unresponsive after {} attempts", register, attempts);
        Err(Error::DeviceUnresponsive)
    }

    /// Async twin of [`Self::read_register_once`].
    pub async fn read_register_once_async(&mut self, register: u8) -> Result<u16, CommE> {
        let frame = self
            .interface
            .read_frame(register)
            .await
            .map_err(Error::from)?;

        let (value, check) = decode_read(frame[0], frame[1]);
        if !verify_read(value, check) {
            return Err(Error::ChecksumMismatch);
        }

        trace!("register {} read {}", register, value);
        Ok(value)
    }

    /// Async twin of [`Self::write_register`].
    pub async fn write_register_async(&mut self, register: u8, value: u16) -> Result<(), CommE> {
        let frame = encode_write(register, value);

        trace!("register {} write {}", register, value);
        self
            .interface
            .write_frame(frame[0], [frame[1], frame[2]])
            .await
            .map_err(Error::from)
    }

    // ==================================================================
    // == Masked Field Access (async) ===================================
    // ==================================================================
    /// Async twin of [`Self::read_field`].
    pub async fn read_field_async(
        &mut self,
        register: u8,
        mask: u16,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u16, CommE> {
        validate_field_mask(mask)?;

        let value = self.read_register_async(register, delay).await?;
        Ok((value & mask) >> lowest_set_bit(mask as u32))
    }

    /// Async twin of [`Self::write_field`].
    pub async fn write_field_async(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        validate_field_mask(mask)?;

        let current = self.read_register_async(register, delay).await?;
        self.write_register_async(register, (current & !mask) | (value & mask))
            .await
    }

    /// Async twin of [`Self::write_mirrored_field`].
    pub async fn write_mirrored_field_async(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        validate_field_mask(mask)?;

        self.write_field_settled_async(shadow_register(register), mask, value, delay)
            .await?;
        self.write_field_settled_async(register, mask, value, delay)
            .await
    }

    async fn write_field_settled_async(
        &mut self,
        register: u8,
        mask: u16,
        value: u16,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let current = self.read_register_async(register, delay).await?;
        self.write_register_async(register, (current & !mask) | (value & mask))
            .await?;
        delay.delay_ms(self.config.write_settle_ms).await;

        Ok(())
    }

    // ==================================================================
    // == Analog Front End Configuration (async) ========================
    // ==================================================================
    /// Async twin of [`Self::set_supply_voltage`].
    pub async fn set_supply_voltage_async(
        &mut self,
        vdd: Vdd,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field_async(REG_SUPPLY_CFG, MASK_VDD, vdd.code(), delay)
            .await
    }

    /// Async twin of [`Self::set_output_mode`].
    pub async fn set_output_mode_async(
        &mut self,
        mode: OutputMode,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field_async(REG_MODE_CTRL, MASK_OUTPUT_MODE, mode.code() << 1, delay)
            .await
    }

    /// Async twin of [`Self::set_automatic_gain_control`].
    pub async fn set_automatic_gain_control_async(
        &mut self,
        enabled: bool,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let disable = !enabled as u16;
        self.write_mirrored_field_async(REG_MODE_CTRL, MASK_AGC_DISABLE, disable << 9, delay)
            .await
    }

    /// Async twin of [`Self::set_master_gain_code`].
    pub async fn set_master_gain_code_async(
        &mut self,
        code: u8,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let code = code.min(MAX_MASTER_GAIN_CODE) as u16;
        self.write_mirrored_field_async(REG_MASTER_GAIN, MASK_MASTER_GAIN_CODE, code, delay)
            .await
    }

    /// Async twin of [`Self::set_master_gain_boost`].
    pub async fn set_master_gain_boost_async(
        &mut self,
        boost: bool,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let boost = boost as u16;
        self.write_mirrored_field_async(REG_MASTER_GAIN, MASK_MASTER_GAIN_BOOST, boost << 7, delay)
            .await
    }

    /// Async twin of [`Self::set_fine_gain_1`].
    pub async fn set_fine_gain_1_async(
        &mut self,
        code: u8,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let code = code.min(MAX_FINE_GAIN_CODE) as u16;
        self.write_mirrored_field_async(REG_FINE_GAIN_1, MASK_FINE_GAIN, code, delay)
            .await
    }

    /// Async twin of [`Self::set_fine_gain_2`].
    pub async fn set_fine_gain_2_async(
        &mut self,
        code: u8,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        let code = code.min(MAX_FINE_GAIN_CODE) as u16;
        self.write_mirrored_field_async(REG_FINE_GAIN_2, MASK_FINE_GAIN, code, delay)
            .await
    }

    /// Async twin of [`Self::set_offset_1`].
    pub async fn set_offset_1_async(
        &mut self,
        trim: OffsetTrim,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field_async(REG_OFFSET_1, MASK_OFFSET_TRIM, trim.bits(), delay)
            .await
    }

    /// Async twin of [`Self::set_offset_2`].
    pub async fn set_offset_2_async(
        &mut self,
        trim: OffsetTrim,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field_async(REG_OFFSET_2, MASK_OFFSET_TRIM, trim.bits(), delay)
            .await
    }

    /// Async twin of [`Self::set_tx_current_bias`].
    pub async fn set_tx_current_bias_async(
        &mut self,
        code: u8,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<(), CommE> {
        self.write_mirrored_field_async(REG_TX_BIAS, MASK_TX_BIAS, code as u16, delay)
            .await
    }

    // ==================================================================
    // == Analog Front End Readback (async) =============================
    // ==================================================================
    /// Async twin of [`Self::read_supply_voltage`].
    pub async fn read_supply_voltage_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<Vdd, CommE> {
        let code = self.read_field_async(REG_SUPPLY_CFG, MASK_VDD, delay).await?;
        Ok(Vdd::from_code(code))
    }

    /// Async twin of [`Self::read_output_mode`].
    pub async fn read_output_mode_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<OutputMode, CommE> {
        let code = self
            .read_field_async(REG_MODE_CTRL, MASK_OUTPUT_MODE, delay)
            .await?;
        Ok(OutputMode::from_code(code))
    }

    /// Async twin of [`Self::read_automatic_gain_control`].
    pub async fn read_automatic_gain_control_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<bool, CommE> {
        let disable = self
            .read_field_async(REG_MODE_CTRL, MASK_AGC_DISABLE, delay)
            .await?;
        Ok(disable == 0)
    }

    /// Async twin of [`Self::read_master_gain_code`].
    pub async fn read_master_gain_code_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u8, CommE> {
        let code = self
            .read_field_async(REG_MASTER_GAIN, MASK_MASTER_GAIN_CODE, delay)
            .await?;
        Ok(code as u8)
    }

    /// Async twin of [`Self::read_master_gain_boost`].
    pub async fn read_master_gain_boost_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<bool, CommE> {
        let boost = self
            .read_field_async(REG_MASTER_GAIN, MASK_MASTER_GAIN_BOOST, delay)
            .await?;
        Ok(boost != 0)
    }

    /// Async twin of [`Self::read_master_gain`].
    pub async fn read_master_gain_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<f32, CommE> {
        let code = self.read_master_gain_code_async(delay).await?;
        master_gain_factor(code).ok_or(Error::UnknownGainCode(code))
    }

    /// Async twin of [`Self::read_fine_gain_1`].
    pub async fn read_fine_gain_1_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u8, CommE> {
        let code = self
            .read_field_async(REG_FINE_GAIN_1, MASK_FINE_GAIN, delay)
            .await?;
        Ok(code as u8)
    }

    /// Async twin of [`Self::read_fine_gain_2`].
    pub async fn read_fine_gain_2_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u8, CommE> {
        let code = self
            .read_field_async(REG_FINE_GAIN_2, MASK_FINE_GAIN, delay)
            .await?;
        Ok(code as u8)
    }

    /// Async twin of [`Self::read_offset_1`].
    pub async fn read_offset_1_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<OffsetTrim, CommE> {
        let bits = self
            .read_field_async(REG_OFFSET_1, MASK_OFFSET_TRIM, delay)
            .await?;
        Ok(OffsetTrim::from_bits(bits))
    }

    /// Async twin of [`Self::read_offset_2`].
    pub async fn read_offset_2_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<OffsetTrim, CommE> {
        let bits = self
            .read_field_async(REG_OFFSET_2, MASK_OFFSET_TRIM, delay)
            .await?;
        Ok(OffsetTrim::from_bits(bits))
    }

    /// Async twin of [`Self::read_tx_current_bias`].
    pub async fn read_tx_current_bias_async(
        &mut self,
        delay: &mut impl AsyncDelayNs,
    ) -> Result<u8, CommE> {
        let code = self.read_field_async(REG_TX_BIAS, MASK_TX_BIAS, delay).await?;
        Ok(code as u8)
    }
}
