//! Unit tests for the typed analog front end setters and readbacks.

use crate::common::test_utils::{assert_float_eq, MockDelay};
use crate::common::{create_mock_driver, Operation};
use ips2550::params::{OffsetSign, OffsetTrim, OutputMode, Vdd};
use ips2550::registers::{
    shadow_register, REG_FINE_GAIN_1, REG_FINE_GAIN_2, REG_MASTER_GAIN, REG_MODE_CTRL,
    REG_OFFSET_1, REG_OFFSET_2, REG_SUPPLY_CFG, REG_TX_BIAS,
};
use ips2550::Error;

#[test]
fn mirrored_setter_writes_shadow_before_live() {
    let (mut driver, interface) = create_mock_driver();

    let mut delay = interface.delay();
    driver.set_supply_voltage(Vdd::Vdd5V0, &mut delay).unwrap();

    // Shadow bank first, live bank second, settling after each write.
    assert_eq!(
        interface.operations(),
        vec![
            Operation::ReadFrame {
                register: 0x41,
                value: 0
            },
            Operation::WriteFrame {
                register: 0x41,
                value: 1
            },
            Operation::Delay { ms: 50 },
            Operation::ReadFrame {
                register: 0x01,
                value: 0
            },
            Operation::WriteFrame {
                register: 0x01,
                value: 1
            },
            Operation::Delay { ms: 50 },
        ]
    );
}

#[test]
fn supply_voltage_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_supply_voltage(Vdd::Vdd5V0, &mut MockDelay)
        .unwrap();
    assert_eq!(interface.register_value(REG_SUPPLY_CFG), 1);
    assert_eq!(
        driver.read_supply_voltage(&mut MockDelay),
        Ok(Vdd::Vdd5V0)
    );

    driver
        .set_supply_voltage(Vdd::Vdd3V3, &mut MockDelay)
        .unwrap();
    assert_eq!(
        driver.read_supply_voltage(&mut MockDelay),
        Ok(Vdd::Vdd3V3)
    );
}

#[test]
fn output_mode_leaves_neighbouring_bits_alone() {
    let (mut driver, interface) = create_mock_driver();

    // AGC disable flag already set in both banks.
    interface.set_register(REG_MODE_CTRL, 0x0200);
    interface.set_register(shadow_register(REG_MODE_CTRL), 0x0200);

    driver
        .set_output_mode(OutputMode::SingleEnded, &mut MockDelay)
        .unwrap();

    assert_eq!(interface.register_value(REG_MODE_CTRL), 0x0202);
    assert_eq!(
        interface.register_value(shadow_register(REG_MODE_CTRL)),
        0x0202
    );
    assert_eq!(
        driver.read_output_mode(&mut MockDelay),
        Ok(OutputMode::SingleEnded)
    );
}

#[test]
fn agc_setter_drives_the_disable_flag() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_automatic_gain_control(false, &mut MockDelay)
        .unwrap();
    assert_eq!(interface.register_value(REG_MODE_CTRL), 0x0200);
    assert_eq!(
        driver.read_automatic_gain_control(&mut MockDelay),
        Ok(false)
    );

    driver
        .set_automatic_gain_control(true, &mut MockDelay)
        .unwrap();
    assert_eq!(interface.register_value(REG_MODE_CTRL), 0);
    assert_eq!(driver.read_automatic_gain_control(&mut MockDelay), Ok(true));
}

#[test]
fn master_gain_code_clamps_to_the_table() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_master_gain_code(200, &mut MockDelay).unwrap();

    assert_eq!(interface.register_value(REG_MASTER_GAIN), 95);
    assert_eq!(
        interface.register_value(shadow_register(REG_MASTER_GAIN)),
        95
    );
}

#[test]
fn master_gain_boost_round_trip() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(REG_MASTER_GAIN, 32);
    interface.set_register(shadow_register(REG_MASTER_GAIN), 32);

    driver.set_master_gain_boost(true, &mut MockDelay).unwrap();

    assert_eq!(interface.register_value(REG_MASTER_GAIN), 32 | 0x80);
    assert_eq!(driver.read_master_gain_boost(&mut MockDelay), Ok(true));
    // The boost stage does not change the code the table is indexed with.
    assert_eq!(driver.read_master_gain_code(&mut MockDelay), Ok(32));
}

#[test]
fn master_gain_reads_its_factor_from_the_table() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(REG_MASTER_GAIN, 32);

    let gain = driver.read_master_gain(&mut MockDelay).unwrap();
    assert_float_eq(gain, 8.0, 1e-6);
}

#[test]
fn out_of_table_gain_codes_are_typed_errors() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(REG_MASTER_GAIN, 100);

    assert_eq!(
        driver.read_master_gain(&mut MockDelay),
        Err(Error::UnknownGainCode(100))
    );
}

#[test]
fn fine_gain_codes_clamp_to_seven_bits() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_fine_gain_1(0xFF, &mut MockDelay).unwrap();
    driver.set_fine_gain_2(0x22, &mut MockDelay).unwrap();

    assert_eq!(interface.register_value(REG_FINE_GAIN_1), 0x7F);
    assert_eq!(
        interface.register_value(shadow_register(REG_FINE_GAIN_1)),
        0x7F
    );
    assert_eq!(interface.register_value(REG_FINE_GAIN_2), 0x22);

    assert_eq!(driver.read_fine_gain_1(&mut MockDelay), Ok(0x7F));
    assert_eq!(driver.read_fine_gain_2(&mut MockDelay), Ok(0x22));
}

#[test]
fn offset_trims_pack_sign_and_code() {
    let (mut driver, interface) = create_mock_driver();

    let negative = OffsetTrim::new(OffsetSign::Negative, 12);
    let positive = OffsetTrim::new(OffsetSign::Positive, 12);

    driver.set_offset_1(negative, &mut MockDelay).unwrap();
    driver.set_offset_2(positive, &mut MockDelay).unwrap();

    assert_eq!(interface.register_value(REG_OFFSET_1), 0x0C);
    assert_eq!(interface.register_value(REG_OFFSET_2), 0x8C);

    assert_eq!(driver.read_offset_1(&mut MockDelay), Ok(negative));
    assert_eq!(driver.read_offset_2(&mut MockDelay), Ok(positive));
}

#[test]
fn tx_bias_carries_the_full_byte() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_tx_current_bias(0xAB, &mut MockDelay).unwrap();

    assert_eq!(interface.register_value(REG_TX_BIAS), 0xAB);
    assert_eq!(
        interface.register_value(shadow_register(REG_TX_BIAS)),
        0xAB
    );
    assert_eq!(driver.read_tx_current_bias(&mut MockDelay), Ok(0xAB));
}
