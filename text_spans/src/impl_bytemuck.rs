// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use bytemuck::{Contiguous, NoUninit, Pod, Zeroable, checked::CheckedBitPattern};

use crate::{Argb, SpanKind};

// Safety: `Argb` is `repr(transparent)` over `u32`.
unsafe impl Zeroable for Argb {}

// Safety: `Argb` is `repr(transparent)` over `u32`, for which all bit
// patterns are valid.
unsafe impl Pod for Argb {}

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for SpanKind {}

// Safety: The enum is `repr(u8)` and `0` is a valid value.
unsafe impl Zeroable for SpanKind {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for SpanKind {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        // Don't need to compare against MIN_VALUE as this is u8 and 0 is the MIN_VALUE.
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u8)`. All values are `u8` and fall within
// the min and max values.
unsafe impl Contiguous for SpanKind {
    type Int = u8;
    const MIN_VALUE: u8 = Self::ForegroundColor as u8;
    const MAX_VALUE: u8 = Self::ForegroundColor as u8;
}

#[cfg(test)]
mod tests {
    use bytemuck::checked::try_from_bytes;
    use bytemuck::{Contiguous, bytes_of};

    use crate::{Argb, SpanKind};

    #[test]
    fn checked_bit_pattern() {
        let valid = bytes_of(&0_u8);
        let invalid = bytes_of(&200_u8);

        assert_eq!(
            Ok(&SpanKind::ForegroundColor),
            try_from_bytes::<SpanKind>(valid)
        );
        assert!(try_from_bytes::<SpanKind>(invalid).is_err());
    }

    #[test]
    fn contiguous() {
        assert_eq!(
            SpanKind::from_integer(0),
            Some(SpanKind::ForegroundColor),
            "tag 0 should map back to the variant"
        );
        assert_eq!(SpanKind::from_integer(1), None, "tag 1 is unassigned");
    }

    #[test]
    fn argb_is_pod() {
        let color = Argb::new(0xFF123456);
        assert_eq!(bytes_of(&color), &0xFF123456_u32.to_ne_bytes());
    }
}
