use log::trace;

use crate::SortContext;
use crate::error::{SortError, check_lengths};

use super::common;

/// Stable counting sort of `src` into a new vector, ordered by `key`.
///
/// Every key must lie in `[0, range)`.
pub fn counting_sort<T, K>(src: &[T], key: K, range: usize) -> Result<Vec<T>, SortError>
where
    T: Clone,
    K: Fn(&T) -> usize,
{
    let mut out = src.to_vec();
    counting_sort_into(src, key, range, &mut out)?;
    Ok(out)
}

pub fn counting_sort_into<T, K>(
    src: &[T],
    key: K,
    range: usize,
    target: &mut [T],
) -> Result<(), SortError>
where
    T: Clone,
    K: Fn(&T) -> usize,
{
    let mut ctx = SortContext::default();
    counting_sort_into_with_ctx(src, key, range, target, &mut ctx)
}

/// Stable counting sort of `src` into `target`, which must have the same length.
///
/// Runs in `O(src.len() + range)` and keeps one `range`-sized table in `ctx`.
/// All keys are validated during the counting pass, so on error `target` has not
/// been written.
pub fn counting_sort_into_with_ctx<T, K>(
    src: &[T],
    key: K,
    range: usize,
    target: &mut [T],
    ctx: &mut SortContext,
) -> Result<(), SortError>
where
    T: Clone,
    K: Fn(&T) -> usize,
{
    if range == 0 {
        return Err(SortError::ZeroRange);
    }
    check_lengths(src.len(), target.len())?;
    trace!("counting sort: len={} range={}", src.len(), range);

    let offsets = ctx.ensure_counts(range);
    for (index, item) in src.iter().enumerate() {
        let k = key(item);
        if k >= range {
            return Err(SortError::KeyOutOfRange {
                index,
                key: k,
                range,
            });
        }
        offsets[k] += 1;
    }

    common::exclusive_prefix_sum(offsets);

    for item in src {
        let k = key(item);
        let pos = offsets[k];
        target[pos].clone_from(item);
        offsets[k] = pos + 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_identity_keys() {
        let src = [2_usize, 5, 0, 2, 1];
        let sorted = counting_sort(&src, |&x| x, 6).unwrap();
        assert_eq!(sorted, [0, 1, 2, 2, 5]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let src = [(2, "first"), (5, "x"), (0, "y"), (2, "second"), (1, "z")];
        let sorted = counting_sort(&src, |p| p.0, 6).unwrap();
        assert_eq!(
            sorted,
            [(0, "y"), (1, "z"), (2, "first"), (2, "second"), (5, "x")]
        );
    }

    #[test]
    fn all_equal_keys_unchanged() {
        let src: Vec<(u8, usize)> = (0..50).map(|i| (3, i)).collect();
        let sorted = counting_sort(&src, |p| p.0 as usize, 4).unwrap();
        assert_eq!(sorted, src);
    }

    #[test]
    fn zero_range_rejected() {
        let mut target = [0_usize; 0];
        assert_eq!(
            counting_sort_into(&[], |&x: &usize| x, 0, &mut target),
            Err(SortError::ZeroRange)
        );
    }

    #[test]
    fn out_of_range_key_rejected_before_writes() {
        let src = [1_usize, 0, 4, 2];
        let mut target = [9_usize; 4];
        assert_eq!(
            counting_sort_into(&src, |&x| x, 4, &mut target),
            Err(SortError::KeyOutOfRange {
                index: 2,
                key: 4,
                range: 4
            })
        );
        assert_eq!(target, [9; 4]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let src = [1_usize, 0];
        let mut target = [0_usize; 3];
        assert_eq!(
            counting_sort_into(&src, |&x| x, 2, &mut target),
            Err(SortError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn context_reuse_across_ranges() {
        let mut ctx = SortContext::default();
        let mut target = [0_usize; 4];
        counting_sort_into_with_ctx(&[7, 1, 7, 3], |&x| x, 8, &mut target, &mut ctx).unwrap();
        assert_eq!(target, [1, 3, 7, 7]);

        counting_sort_into_with_ctx(&[1, 0, 1, 0], |&x| x, 2, &mut target, &mut ctx).unwrap();
        assert_eq!(target, [0, 0, 1, 1]);
    }

    #[test]
    fn empty_and_single() {
        assert!(counting_sort(&[], |&x: &usize| x, 1).unwrap().is_empty());
        assert_eq!(counting_sort(&["only"], |_| 0, 1).unwrap(), ["only"]);
    }
}
