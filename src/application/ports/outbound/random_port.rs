//! Random number generation port
//!
//! Generators never own an RNG. The host injects one, which keeps draws
//! reproducible under test and lets the host choose how concurrent requests
//! share randomness.

/// Random number generation abstraction for the generators.
///
/// # Implementations
///
/// - `ThreadRngAdapter` (production, thread-local RNG per draw)
/// - `SeededRandomAdapter` (reproducible sessions from a fixed seed)
/// - `FixedRandomPort` (tests, returns scripted values)
pub trait RandomPort: Send + Sync {
    /// Generate a uniformly distributed u32 in `[min, max]` (inclusive on both ends)
    fn random_range(&self, min: u32, max: u32) -> u32;
}

/// Scripted random port for deterministic tests.
///
/// Returns values from the provided sequence, cycling when exhausted, and
/// clamps each one into the requested range.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedRandomPort {
    values: Vec<u32>,
    index: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl FixedRandomPort {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "FixedRandomPort needs at least one value");
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Always return the same value (clamped)
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Always return the upper bound of the requested range
    pub fn always_max() -> Self {
        Self::constant(u32::MAX)
    }

    /// Always return the lower bound of the requested range
    pub fn always_min() -> Self {
        Self::constant(0)
    }
}

#[cfg(test)]
impl RandomPort for FixedRandomPort {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_random_port_constant() {
        let rng = FixedRandomPort::constant(10);
        assert_eq!(rng.random_range(1, 20), 10);
        assert_eq!(rng.random_range(1, 6), 6);
        assert_eq!(rng.random_range(15, 20), 15);
    }

    #[test]
    fn test_fixed_random_port_sequence_cycles() {
        let rng = FixedRandomPort::new(vec![1, 5, 20]);
        assert_eq!(rng.random_range(1, 20), 1);
        assert_eq!(rng.random_range(1, 20), 5);
        assert_eq!(rng.random_range(1, 20), 20);
        assert_eq!(rng.random_range(1, 20), 1);
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(FixedRandomPort::always_max().random_range(1, 7), 7);
        assert_eq!(FixedRandomPort::always_min().random_range(1, 7), 1);
    }
}
