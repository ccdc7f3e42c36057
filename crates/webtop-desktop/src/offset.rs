//! Random offsets applied when a window opens

use crate::math::Vec2;

/// Source of the open offset added to a window's base position
pub trait OffsetSource {
    /// Return a whole-pixel value in `[0, max)`, or `0.0` when `max < 1`
    fn next_offset(&mut self, max: f32) -> f32;

    /// Offset applied to both axes
    fn next_offset_vec(&mut self, max: f32) -> Vec2 {
        Vec2::splat(self.next_offset(max))
    }
}

/// Offsets drawn from the platform entropy source
///
/// Uses `crypto.getRandomValues` in the browser. Falls back to no offset if
/// entropy is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOffsets;

impl OffsetSource for RandomOffsets {
    fn next_offset(&mut self, max: f32) -> f32 {
        let bound = max.floor();
        if bound.is_nan() || bound < 1.0 {
            return 0.0;
        }
        let mut buf = [0u8; 4];
        if let Err(err) = getrandom::getrandom(&mut buf) {
            tracing::warn!(%err, "entropy unavailable, opening without offset");
            return 0.0;
        }
        (u32::from_le_bytes(buf) % bound as u32) as f32
    }
}

/// Constant offset, for deterministic layouts and tests
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedOffset(pub f32);

impl OffsetSource for FixedOffset {
    fn next_offset(&mut self, max: f32) -> f32 {
        if max < 1.0 {
            0.0
        } else {
            self.0.clamp(0.0, max.floor() - 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_offsets_in_range() {
        let mut src = RandomOffsets;
        for _ in 0..1000 {
            let v = src.next_offset(50.0);
            assert!((0.0..50.0).contains(&v));
            assert_eq!(v, v.floor());
        }
    }

    #[test]
    fn test_random_offsets_zero_bound() {
        let mut src = RandomOffsets;
        assert_eq!(src.next_offset(0.0), 0.0);
        assert_eq!(src.next_offset(0.5), 0.0);
        assert_eq!(src.next_offset(f32::NAN), 0.0);
    }

    #[test]
    fn test_fixed_offset_respects_bound() {
        let mut src = FixedOffset(20.0);
        assert_eq!(src.next_offset(50.0), 20.0);
        assert_eq!(src.next_offset(10.0), 9.0);
        assert_eq!(src.next_offset(0.0), 0.0);
        assert_eq!(src.next_offset_vec(50.0), Vec2::splat(20.0));
    }
}
