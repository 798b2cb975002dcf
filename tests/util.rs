use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

/// Check that `sampler` only ever yields values from `expected`, hits all of them,
/// and does so roughly uniformly.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(expected: &[T], mut sampler: impl FnMut() -> Option<T>) {
    assert!(
        expected.iter().all_unique(),
        "got duplicate value in expected: {:?}",
        expected
    );

    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let samples_per_value = 500;
    let total_samples = samples_per_value * expected.len();

    let mut all_counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();

    for _ in 0..total_samples {
        let sample = sampler().expect("there are expected values, so the sampler must return one");
        match all_counts.get_mut(&sample) {
            None => panic!("non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    for value in expected {
        let count = *all_counts.get(value).unwrap();
        let relative = count as f32 / samples_per_value as f32;

        assert!(
            (0.7..1.3).contains(&relative),
            "value {:?} was over/under sampled: {} ~ {}",
            value,
            count,
            relative,
        );
    }
}
