//! Monotonic reference counters.

/// A counter handing out strictly increasing ids.
///
/// The counter advances before returning, so a `Ref` started at `n`
/// yields `n + 1` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ref {
    current: i64,
}

impl Ref {
    /// Create a counter starting at `start`.
    pub const fn new(start: i64) -> Self {
        Self { current: start }
    }

    /// Advance and return the next id.
    #[inline]
    pub fn next_ref(&mut self) -> i64 {
        self.current += 1;
        self.current
    }

    /// The last id handed out (or the start value).
    #[inline]
    pub fn current(&self) -> i64 {
        self.current
    }
}
