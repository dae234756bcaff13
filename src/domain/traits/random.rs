use std::ops::Range;

/// Source of the simulated distances and ETAs
///
/// Production code draws from a real generator; tests can script exact values.
pub trait RandomSource: Send {
    /// Uniform draw from the half-open `range`
    fn draw(&mut self, range: Range<u32>) -> u32;
}
