//! Stable sorts driven by caller-supplied keys and comparators.
//!
//! - [`insertion_sort`] / [`insertion_sort_into_by`]: comparator baseline.
//! - [`counting_sort`]: bounded integer keys in `[0, range)`.
//! - [`radix_sort`]: LSD passes of counting sort over the digits of a `u64` key.
//!
//! The `*_into` forms write into a caller buffer and never modify the input.

mod algorithms;
mod error;

pub use algorithms::counting_sort::{
    counting_sort, counting_sort_into, counting_sort_into_with_ctx,
};
pub use algorithms::insertion_sort::{
    insertion_sort, insertion_sort_by, insertion_sort_into, insertion_sort_into_by,
};
pub use algorithms::radix_sort::{
    digit_at, digit_count, radix_sort, radix_sort_into, radix_sort_into_with_ctx,
};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataTrack {
    FullU64,
    BoundedU20,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    CountingSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
    }
}

pub fn supports_track(algo: SortAlgorithm, track: DataTrack) -> bool {
    !matches!(
        (algo, track),
        (SortAlgorithm::CountingSort, DataTrack::FullU64)
    )
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub default_radix: u64,
    pub max_counting_range: usize,
    pub wide_radix_fallback: u64,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    default_radix: 10,
    max_counting_range: 1 << 20,
    wide_radix_fallback: 256,
};

/// Scratch state reused across calls. Holds the occurrence table that counting
/// sort turns into per-key placement offsets.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub counts: Vec<usize>,
}

impl SortContext {
    #[inline]
    pub(crate) fn ensure_counts(&mut self, len: usize) -> &mut [usize] {
        if self.counts.len() < len {
            self.counts.resize(len, 0);
        }
        let counts = &mut self.counts[..len];
        counts.fill(0);
        counts
    }
}

pub fn sort_u64(algo: SortAlgorithm, data: &mut [u64]) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_u64_with_ctx(algo, data, &mut ctx)
}

/// Sorts `data` ascending using each value as its own key.
pub fn sort_u64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [u64],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    match algo {
        SortAlgorithm::InsertionSort => {
            insertion_sort(data);
            Ok(())
        }
        SortAlgorithm::CountingSort => {
            let Some((_, max)) = algorithms::common::min_max(data) else {
                return Ok(());
            };
            let range = max as u128 + 1;
            if range > TUNED_PARAMS.max_counting_range as u128 {
                return Err(SortError::RangeTooLarge {
                    range,
                    limit: TUNED_PARAMS.max_counting_range,
                });
            }
            let src = data.to_vec();
            counting_sort_into_with_ctx(&src, |&x| x as usize, range as usize, data, ctx)
        }
        SortAlgorithm::RadixSort => {
            let src = data.to_vec();
            radix_sort_into_with_ctx(&src, |&x| x, TUNED_PARAMS.default_radix, data, ctx)
        }
    }
}
