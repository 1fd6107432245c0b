//! CPU and memory burners used to generate load on demand.
//!
//! Every workload is fixed-size and parameterless on purpose: callers compare
//! deployments under an identical cost per request. All of them block the
//! calling thread until done, so async callers must offload them.

use rand::Rng;

use crate::error::{LoadLabError, Result};

/// Fibonacci term computed by the CPU burner.
pub const FIB_TERM: u32 = 40;

/// F(40).
pub const FIB_40: u64 = 102_334_155;

/// Length of every generated sequence.
pub const SEQUENCE_LEN: usize = 1_000_000;

/// Index sampled by the legacy memory route.
pub const LEGACY_SAMPLE_INDEX: usize = 42;

/// Which element [`allocate_and_sample`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePick {
    /// Uniformly random position.
    Random,
    /// Fixed position, must be below [`SEQUENCE_LEN`].
    At(usize),
}

/// Naive doubly-recursive Fibonacci with F(0)=0, F(1)=1. Exponential time.
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Fill `len` integers drawn uniformly from `[0, i32::MAX)`.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    let mut seq = Vec::with_capacity(len);
    for _ in 0..len {
        seq.push(rng.gen_range(0..i32::MAX));
    }
    seq
}

/// Allocate a full sequence and return one of its elements.
pub fn allocate_and_sample<R: Rng + ?Sized>(rng: &mut R, pick: SamplePick) -> Result<i32> {
    let seq = random_sequence(rng, SEQUENCE_LEN);
    let idx = match pick {
        SamplePick::Random => rng.gen_range(0..seq.len()),
        SamplePick::At(i) => i,
    };
    seq.get(idx)
        .copied()
        .ok_or_else(|| LoadLabError::BadRequest(format!("sample index {idx} out of range")))
}

/// Allocate a full sequence, sort it ascending and return the last (largest) element.
pub fn allocate_sort_and_return_last<R: Rng + ?Sized>(rng: &mut R) -> Result<i32> {
    let mut seq = random_sequence(rng, SEQUENCE_LEN);
    seq.sort_unstable();
    seq.last()
        .copied()
        .ok_or_else(|| LoadLabError::Internal("empty sequence".into()))
}

/// `fib(40)`.
pub fn consume_cpu() -> u64 {
    fibonacci(FIB_TERM)
}

/// Random element of a freshly allocated sequence.
pub fn consume_memory() -> Result<i32> {
    allocate_and_sample(&mut rand::thread_rng(), SamplePick::Random)
}

/// Element `index` of a freshly allocated sequence.
pub fn consume_memory_at(index: usize) -> Result<i32> {
    allocate_and_sample(&mut rand::thread_rng(), SamplePick::At(index))
}

/// Maximum of a freshly allocated and sorted sequence.
pub fn consume_memory_and_cpu() -> Result<i32> {
    allocate_sort_and_return_last(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn cpu_burner_returns_fib_40() {
        assert_eq!(consume_cpu(), FIB_40);
    }

    #[test]
    fn sequence_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = random_sequence(&mut rng, 10_000);
        assert_eq!(seq.len(), 10_000);
        assert!(seq.iter().all(|v| (0..i32::MAX).contains(v)));
    }

    #[test]
    fn fixed_pick_matches_generated_sequence() {
        let expected = random_sequence(&mut StdRng::seed_from_u64(11), SEQUENCE_LEN)[LEGACY_SAMPLE_INDEX];
        let got = allocate_and_sample(&mut StdRng::seed_from_u64(11), SamplePick::At(LEGACY_SAMPLE_INDEX)).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        let err = allocate_and_sample(&mut StdRng::seed_from_u64(1), SamplePick::At(SEQUENCE_LEN)).unwrap_err();
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }

    #[test]
    fn random_pick_is_in_range() {
        let v = consume_memory().unwrap();
        assert!((0..i32::MAX).contains(&v));
    }

    #[test]
    fn sorted_last_is_sequence_maximum() {
        let seq = random_sequence(&mut StdRng::seed_from_u64(42), SEQUENCE_LEN);
        let max = *seq.iter().max().unwrap();
        let last = allocate_sort_and_return_last(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(last, max);
        assert!(seq.iter().all(|v| *v <= last));
    }
}
