//! Binary polynomial-division checksum engine used by the register codec.

use crate::bits::bit_length;

/// Generator polynomial protecting every register transaction.
///
/// Its degree fixes the check field at 3 bits.
pub const CHECK_GENERATOR: u32 = 0b1011;

/// Computes the GF(2) polynomial-division remainder of `message` against
/// `generator`.
///
/// The message is shifted left by the check-field width (generator degree
/// minus one) and the vacated low bits are seeded with `filler`. Passing
/// `filler = 0` produces fresh check bits for an outgoing message; passing
/// the received check bits reruns the division over a received message,
/// which yields 0 exactly when message and check bits are consistent.
///
/// `message` must leave at least the check-field width of headroom below
/// bit 31. A zero `generator` leaves nothing to divide by and returns
/// `filler` unchanged.
pub const fn checksum(message: u32, generator: u32, filler: u32) -> u32 {
    if generator == 0 {
        return filler;
    }

    let degree = bit_length(generator);
    let width = degree - 1;

    let mut word = (message << width) | filler;
    while (word >> width) != 0 {
        let first_one = bit_length(word);
        word ^= generator << (first_one - degree);
    }
    word
}
