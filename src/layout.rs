/// A contiguous run of `width` bits starting `shift` bits above the least significant bit.
///
/// Packing never validates. A value wider than `width` keeps only its low `width` bits, so out of
/// range input produces a well defined but surprising result instead of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    /// Position of the field's least significant bit.
    pub shift: u32,
    /// Number of bits in the field.
    pub width: u32,
}

impl BitField {
    /// The field's bits at their position in the 64 bit value.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        self.low_mask() << self.shift
    }

    #[inline(always)]
    const fn low_mask(self) -> u64 {
        u64::MAX >> (64 - self.width)
    }

    /// Moves `value` into the field's slot, dropping any bits that don't fit.
    #[inline(always)]
    pub const fn pack(self, value: u64) -> u64 {
        (value & self.low_mask()) << self.shift
    }

    /// Reads the field as an unsigned integer.
    #[inline(always)]
    pub const fn unpack(self, bits: u64) -> u64 {
        (bits >> self.shift) & self.low_mask()
    }

    /// Reads the field as a two's complement integer of `width` bits.
    #[inline(always)]
    pub const fn unpack_signed(self, bits: u64) -> i64 {
        let top = 64 - self.shift - self.width;
        ((bits << top) as i64) >> (top + self.shift)
    }

    /// Clears the field in `bits` and stores `value` in its place.
    #[inline(always)]
    pub const fn replace(self, bits: u64, value: u64) -> u64 {
        (bits & !self.mask()) | self.pack(value)
    }
}

pub const YEAR: BitField = BitField {
    shift: 46,
    width: 18,
};
pub const DAY_OF_YEAR: BitField = BitField {
    shift: 37,
    width: 9,
};
pub const HOUR: BitField = BitField {
    shift: 32,
    width: 5,
};
pub const MINUTE: BitField = BitField {
    shift: 26,
    width: 6,
};
pub const SECOND: BitField = BitField {
    shift: 20,
    width: 6,
};
pub const MICROSECOND: BitField = BitField {
    shift: 0,
    width: 20,
};

/// Every field, most significant first. Comparing two encoded values compares these in order.
pub const FIELDS: [BitField; 6] = [YEAR, DAY_OF_YEAR, HOUR, MINUTE, SECOND, MICROSECOND];
