//! Unit tests for masked field reads and read-modify-write field updates.

use crate::common::test_utils::MockDelay;
use crate::common::{create_mock_driver, Operation};
use ips2550::Error;

#[test]
fn field_extraction_right_aligns_to_the_mask() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x05, 0b0101_1000);

    let field = driver
        .read_field(0x05, 0b0001_1100, &mut MockDelay)
        .unwrap();
    assert_eq!(field, 0b110);
}

#[test]
fn single_bit_field_reads_back() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x00, 0x0200);

    assert_eq!(driver.read_field(0x00, 0x0200, &mut MockDelay), Ok(1));
    assert_eq!(driver.read_field(0x00, 0x0002, &mut MockDelay), Ok(0));
}

#[test]
fn write_field_touches_only_masked_bits() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x05, 0b0101_1010);

    driver
        .write_field(0x05, 0b0001_1100, 0b0000_0100, &mut MockDelay)
        .unwrap();

    assert_eq!(interface.register_value(0x05), 0b0100_0110);
    assert_eq!(
        interface.operations(),
        vec![
            Operation::ReadFrame {
                register: 0x05,
                value: 0b0101_1010
            },
            Operation::WriteFrame {
                register: 0x05,
                value: 0b0100_0110
            },
        ]
    );
}

#[test]
fn write_field_takes_values_in_register_position() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .write_field(0x00, 0x0200, 0x0200, &mut MockDelay)
        .unwrap();
    assert_eq!(interface.register_value(0x00), 0x0200);

    // A right-aligned 1 misses the mask entirely and clears the field.
    driver.write_field(0x00, 0x0200, 1, &mut MockDelay).unwrap();
    assert_eq!(interface.register_value(0x00), 0);
}

#[test]
fn rewriting_the_same_field_value_is_idempotent() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x03, 0x0055);

    driver
        .write_field(0x03, 0x007F, 0x0011, &mut MockDelay)
        .unwrap();
    driver
        .write_field(0x03, 0x007F, 0x0011, &mut MockDelay)
        .unwrap();

    assert_eq!(interface.register_value(0x03), 0x0011);

    let writes: Vec<_> = interface
        .operations()
        .into_iter()
        .filter(|op| matches!(op, Operation::WriteFrame { .. }))
        .collect();
    assert_eq!(
        writes,
        vec![
            Operation::WriteFrame {
                register: 0x03,
                value: 0x0011
            },
            Operation::WriteFrame {
                register: 0x03,
                value: 0x0011
            },
        ]
    );
}

#[test]
fn full_value_mask_is_accepted() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .write_field(0x07, 0x07FF, 0x07FF, &mut MockDelay)
        .unwrap();
    assert_eq!(interface.register_value(0x07), 0x07FF);
}

#[test]
fn zero_masks_are_rejected() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.read_field(0x02, 0, &mut MockDelay),
        Err(Error::InvalidMask)
    );
    assert_eq!(
        driver.write_field(0x02, 0, 0, &mut MockDelay),
        Err(Error::InvalidMask)
    );
    assert_eq!(
        driver.write_mirrored_field(0x02, 0, 0, &mut MockDelay),
        Err(Error::InvalidMask)
    );

    // Validation happens before any bus traffic.
    assert!(interface.operations().is_empty());
}

#[test]
fn split_masks_are_rejected() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.read_field(0x02, 0b0101, &mut MockDelay),
        Err(Error::InvalidMask)
    );
    assert_eq!(
        driver.write_field(0x02, 0b1000_0000_0001, 0, &mut MockDelay),
        Err(Error::InvalidMask)
    );
    assert_eq!(
        driver.write_mirrored_field(0x02, 0b0110_0110, 0, &mut MockDelay),
        Err(Error::InvalidMask)
    );

    assert!(interface.operations().is_empty());
}
