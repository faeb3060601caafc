//! Instance selection for discovery

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one of the discovered instances, uniformly at random.
///
/// The default selector draws from the thread-local RNG and holds no state.
/// A seeded selector makes the sequence of picks reproducible.
#[derive(Debug, Default)]
pub struct InstanceSelector {
    seeded: Option<Mutex<StdRng>>,
}

impl InstanceSelector {
    /// Selector backed by the thread-local RNG.
    pub fn random() -> Self {
        Self { seeded: None }
    }

    /// Deterministic selector for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Pick an index in `0..len`, or `None` when `len` is zero.
    pub fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let index = match &self.seeded {
            Some(rng) => rng.lock().random_range(0..len),
            None => rand::rng().random_range(0..len),
        };
        Some(index)
    }

    /// Pick one item from `items`, or `None` when it is empty.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).map(|index| &items[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yields_none() {
        let selector = InstanceSelector::random();
        let items: [u8; 0] = [];
        assert!(selector.pick(&items).is_none());
        assert!(InstanceSelector::seeded(7).pick_index(0).is_none());
    }

    #[test]
    fn test_single_item_always_selected() {
        let selector = InstanceSelector::random();
        for _ in 0..100 {
            assert_eq!(selector.pick(&["only"]), Some(&"only"));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = InstanceSelector::seeded(42);
        let b = InstanceSelector::seeded(42);

        let picks_a: Vec<usize> = (0..50).filter_map(|_| a.pick_index(10)).collect();
        let picks_b: Vec<usize> = (0..50).filter_map(|_| b.pick_index(10)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_seeded_distribution_is_uniform() {
        let selector = InstanceSelector::seeded(1234);
        let n = 4;
        let draws = 40_000;
        let mut counts = vec![0usize; n];

        for _ in 0..draws {
            counts[selector.pick_index(n).unwrap()] += 1;
        }

        let expected = draws / n;
        for count in counts {
            // Within 5% of the expected share.
            assert!(
                count.abs_diff(expected) < expected / 20,
                "count {count} too far from {expected}"
            );
        }
    }
}
