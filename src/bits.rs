//! Bit-index helpers shared by the checksum engine and the field accessors.

/// Number of bits needed to represent `word`: the 1-indexed position of its
/// most significant set bit, or 0 when `word` is 0.
pub(crate) const fn bit_length(word: u32) -> u32 {
    32 - word.leading_zeros()
}

/// Index of the least significant set bit of `word`, or 0 when `word` is 0.
pub(crate) const fn lowest_set_bit(word: u32) -> u32 {
    if word == 0 {
        return 0;
    }
    word.trailing_zeros()
}
