//! Bit-level IEEE-754 binary16 conversion.
//!
//! The asset formats this crate targets store color components as 16-bit
//! half floats, which Rust has no native type for. Both directions are pure
//! functions over raw bit patterns; `f32_to_half16` rounds to nearest even.

/// Convert an `f32` to its binary16 bit pattern, rounding to nearest even.
pub fn f32_to_half16(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xff) as i32;
    let mant = bits & 0x007f_ffff;

    if exp == 0xff {
        // Infinity and NaN. NaNs keep the quiet bit plus the top payload bits
        // so they stay NaN after truncation.
        let payload = if mant == 0 {
            0
        } else {
            0x0200 | ((mant >> 13) as u16 & 0x03ff)
        };
        return sign | 0x7c00 | payload;
    }

    let unbiased = exp - 127;

    if unbiased >= 16 {
        // Above the binary16 range, round to infinity.
        return sign | 0x7c00;
    }

    if unbiased >= -14 {
        // Normal range. Truncate the mantissa 23 -> 10 bits and round.
        let mut half = (((unbiased + 15) as u32) << 10) | (mant >> 13);
        let round = mant & 0x1fff;
        if round > 0x1000 || (round == 0x1000 && (half & 1) == 1) {
            // A carry out of the mantissa bumps the exponent, which is the
            // correct rounding at power-of-two and overflow boundaries.
            half += 1;
        }
        return sign | half as u16;
    }

    if unbiased < -25 {
        // Too small for even a binary16 subnormal.
        return sign;
    }

    // Subnormal range. Restore the implicit leading one, shift the mantissa
    // into subnormal position, and round to nearest even.
    let mant = mant | 0x0080_0000;
    let shift = (-unbiased - 1) as u32;
    let mut m = mant >> shift;
    let round = mant & ((1 << shift) - 1);
    let halfway = 1u32 << (shift - 1);
    if round > halfway || (round == halfway && (m & 1) == 1) {
        // May round up into the smallest normal; the encodings are contiguous.
        m += 1;
    }
    sign | m as u16
}

/// Convert a binary16 bit pattern to the `f32` it represents, exactly.
pub fn half16_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits & 0x8000) << 16;
    let exp = (bits >> 10) & 0x1f;
    let mant = u32::from(bits & 0x03ff);

    match exp {
        0 => {
            if mant == 0 {
                return f32::from_bits(sign);
            }
            // Normalize the subnormal into an f32 normal.
            let mut exp32 = -14i32;
            let mut m = mant;
            while m & 0x0400 == 0 {
                m <<= 1;
                exp32 -= 1;
            }
            let m = m & 0x03ff;
            f32::from_bits(sign | (((exp32 + 127) as u32) << 23) | (m << 13))
        }
        0x1f => f32::from_bits(sign | 0x7f80_0000 | (mant << 13)),
        _ => f32::from_bits(sign | ((u32::from(exp) + 112) << 23) | (mant << 13)),
    }
}
