//! Stacking order counter

/// Monotonic stacking counter
///
/// Values are handed out strictly increasing and never reused, so the most
/// recently raised window always has the largest value.
#[derive(Clone, Debug)]
pub struct ZOrder {
    current: u64,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ZOrder {
    /// Create a counter starting above `base`
    pub fn new(base: u64) -> Self {
        Self { current: base }
    }

    /// Highest value handed out so far (or the base)
    #[inline]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Hand out the next stacking value, `None` once the counter is exhausted
    #[inline]
    pub fn next(&mut self) -> Option<u64> {
        self.current = self.current.checked_add(1)?;
        Some(self.current)
    }
}
