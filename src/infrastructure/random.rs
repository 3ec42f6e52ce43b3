//! RandomPort adapters backed by `rand`

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::application::ports::outbound::RandomPort;

/// Draws from the calling thread's RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngAdapter;

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// A single seeded RNG shared behind a mutex.
///
/// Every draw in the process comes from one sequence: the same seed and the
/// same requests in the same order replay identically.
#[derive(Debug)]
pub struct SeededRandomAdapter {
    rng: Mutex<StdRng>,
}

impl SeededRandomAdapter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomPort for SeededRandomAdapter {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_within_bounds() {
        let rng = ThreadRngAdapter;
        for _ in 0..1_000 {
            let value = rng.random_range(1, 6);
            assert!((1..=6).contains(&value));
        }
        assert_eq!(rng.random_range(4, 4), 4);
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let a = SeededRandomAdapter::new(42);
        let b = SeededRandomAdapter::new(42);
        let first: Vec<u32> = (0..50).map(|_| a.random_range(1, 30)).collect();
        let second: Vec<u32> = (0..50).map(|_| b.random_range(1, 30)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|v| (1..=30).contains(v)));
    }

    #[test]
    fn test_seeded_adapter_is_shareable() {
        let rng = std::sync::Arc::new(SeededRandomAdapter::new(7));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rng = rng.clone();
                std::thread::spawn(move || (0..100).map(|_| rng.random_range(1, 20)).collect::<Vec<_>>())
            })
            .collect();
        for handle in handles {
            let values = handle.join().unwrap();
            assert!(values.iter().all(|v| (1..=20).contains(v)));
        }
    }
}
