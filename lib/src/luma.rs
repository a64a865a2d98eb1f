//! Brightness primitives: per-pixel luma, block averaging and linear rescaling

/// Rec. 709 luma weights applied to red, green and blue
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Largest luma a pixel can produce
pub const LUMA_MAX: u32 = u16::MAX as u32;

/// Luma of a 16-bit color, truncated to an integer
///
/// Formula: L = 0.2126*R + 0.7152*G + 0.0722*B
#[inline]
pub fn luma(r: u16, g: u16, b: u16) -> u32 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    (f64::from(r) * wr + f64::from(g) * wg + f64::from(b) * wb) as u32
}

/// Average luma of a block of 16-bit `[r, g, b, a]` pixels
///
/// Alpha is ignored. The mean uses integer division; an empty block is 0.
pub fn average_luma(pixels: &[[u16; 4]]) -> u32 {
    if pixels.is_empty() {
        return 0;
    }

    let sum: u64 = pixels
        .iter()
        .map(|&[r, g, b, _]| u64::from(luma(r, g, b)))
        .sum();

    (sum / pixels.len() as u64) as u32
}

/// A primitive number that [`scale`] can read and produce
pub trait Scalar: Copy + PartialOrd {
    fn to_f64(self) -> f64;

    /// Truncates toward zero, saturating at the type's bounds
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Map `value` from `[from_low, from_high]` onto `[to_low, to_high]`
///
/// Bounds given in the wrong order are swapped and `value` is clamped into the
/// source range before mapping. The result is converted to `T` by truncation.
///
/// The fraction is `value / (from_high - from_low)`; `from_low` is not
/// subtracted from `value`, so the mapping is only linear over the whole
/// range when `from_low` is zero. A zero-width source range maps to `to_low`.
pub fn scale<K: Scalar, T: Scalar>(
    value: K,
    from_low: K,
    from_high: K,
    to_low: T,
    to_high: T,
) -> T {
    let (from_low, from_high) = if from_low > from_high {
        (from_high, from_low)
    } else {
        (from_low, from_high)
    };
    let (to_low, to_high) = if to_low > to_high {
        (to_high, to_low)
    } else {
        (to_low, to_high)
    };

    let value = if value < from_low {
        from_low
    } else if value > from_high {
        from_high
    } else {
        value
    };

    let span = from_high.to_f64() - from_low.to_f64();
    if span == 0.0 {
        return to_low;
    }

    let fraction = value.to_f64() / span;
    T::from_f64(fraction * (to_high.to_f64() - to_low.to_f64()) + to_low.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(65535, 65535, 65535), LUMA_MAX);
    }

    #[test]
    fn test_luma_weights_per_channel() {
        // 65535 * weight, truncated
        assert_eq!(luma(65535, 0, 0), 13932);
        assert_eq!(luma(0, 65535, 0), 46870);
        assert_eq!(luma(0, 0, 65535), 4731);
    }

    #[test]
    fn test_average_luma_ignores_alpha() {
        let opaque = [[65535, 65535, 65535, 65535]];
        let clear = [[65535, 65535, 65535, 0]];
        assert_eq!(average_luma(&opaque), average_luma(&clear));
    }

    #[test]
    fn test_average_luma_integer_division() {
        let block = [[0, 0, 0, 0], [0, 0, 0, 0], [65535, 65535, 65535, 0]];
        assert_eq!(average_luma(&block), 65535 / 3);
    }

    #[test]
    fn test_average_luma_empty_block() {
        assert_eq!(average_luma(&[]), 0);
    }

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale(0u32, 0, 65535, 0usize, 27), 0);
        assert_eq!(scale(65535u32, 0, 65535, 0usize, 27), 27);
    }

    #[test]
    fn test_scale_truncates() {
        // 0.5 * 27 = 13.5
        assert_eq!(scale(50i32, 0, 100, 0i32, 27), 13);
        assert_eq!(scale(99i32, 0, 100, 0i32, 1), 0);
    }

    #[test]
    fn test_scale_clamps_to_source_range() {
        assert_eq!(
            scale(-100i64, 0, 65535, 0usize, 27),
            scale(0i64, 0, 65535, 0usize, 27)
        );
        assert_eq!(
            scale(999_999i64, 0, 65535, 0usize, 27),
            scale(65535i64, 0, 65535, 0usize, 27)
        );
    }

    #[test]
    fn test_scale_swaps_reversed_bounds() {
        assert_eq!(scale(25u8, 100, 0, 10u8, 0), scale(25u8, 0, 100, 0u8, 10));
    }

    #[test]
    fn test_scale_between_float_and_int() {
        assert_eq!(scale(0.25f64, 0.0, 1.0, 0u8, 200), 50);
        let half: f32 = scale(128u16, 0, 256, 0.0f32, 1.0);
        assert!((half - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scale_keeps_numerator_without_lower_bound() {
        // value / (high - low), not (value - low) / (high - low)
        assert_eq!(scale(20i32, 10, 30, 0i32, 100), 100);
        assert_eq!(scale(10i32, 10, 30, 0i32, 100), 50);
    }

    #[test]
    fn test_scale_zero_width_range() {
        assert_eq!(scale(5u32, 5, 5, 3u32, 9), 3);
    }
}
