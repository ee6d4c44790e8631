//! LSD radix sort on a derived `u64` key.
//!
//! One stable counting-sort pass per digit, least significant first. The pass
//! count is the digit count of the largest key, found in a pre-pass. Keys are
//! unsigned, so negative keys have to be mapped by the caller.

use log::{debug, trace};

use crate::{SortContext, TUNED_PARAMS};
use crate::error::{SortError, check_lengths};

use super::counting_sort::counting_sort_into_with_ctx;

/// Number of base-`radix` digits in `key`; zero has one digit.
pub fn digit_count(key: u64, radix: u64) -> Result<u32, SortError> {
    check_radix(radix)?;
    Ok(count_digits(key, radix))
}

/// Digit of `key` examined on `pass`, counted from 1 at the least significant end.
pub fn digit_at(key: u64, pass: u32, radix: u64) -> Result<u64, SortError> {
    check_radix(radix)?;
    if pass == 0 {
        return Err(SortError::ZeroPass);
    }
    Ok(match radix.checked_pow(pass - 1) {
        Some(divisor) => (key / divisor) % radix,
        None => 0,
    })
}

#[inline]
fn count_digits(mut key: u64, radix: u64) -> u32 {
    let mut digits = 1;
    while key >= radix {
        key /= radix;
        digits += 1;
    }
    digits
}

pub fn radix_sort<T, K>(src: &[T], key: K, radix: u64) -> Result<Vec<T>, SortError>
where
    T: Clone,
    K: Fn(&T) -> u64,
{
    let mut out = src.to_vec();
    radix_sort_into(src, key, radix, &mut out)?;
    Ok(out)
}

pub fn radix_sort_into<T, K>(
    src: &[T],
    key: K,
    radix: u64,
    target: &mut [T],
) -> Result<(), SortError>
where
    T: Clone,
    K: Fn(&T) -> u64,
{
    let mut ctx = SortContext::default();
    radix_sort_into_with_ctx(src, key, radix, target, &mut ctx)
}

/// Sorts `src` ascending by `key` into `target`, which must have the same length.
///
/// Runs `digit_count(max key)` passes of `O(len + radix)` each. Passes after the
/// first alternate between `target` and one scratch copy; the result always ends
/// up in `target`.
///
/// The digit table holds `min(radix, max key + 1)` slots. When that exceeds
/// `TUNED_PARAMS.max_counting_range` the passes run in base
/// `TUNED_PARAMS.wide_radix_fallback` instead, which yields the same order.
pub fn radix_sort_into_with_ctx<T, K>(
    src: &[T],
    key: K,
    radix: u64,
    target: &mut [T],
    ctx: &mut SortContext,
) -> Result<(), SortError>
where
    T: Clone,
    K: Fn(&T) -> u64,
{
    check_radix(radix)?;
    check_lengths(src.len(), target.len())?;

    let Some(max_key) = src.iter().map(&key).max() else {
        return Ok(());
    };
    let (radix, table_len) = digit_table(radix, max_key)?;
    let passes = count_digits(max_key, radix);
    debug!(
        "radix sort: len={} radix={} max_key={} passes={}",
        src.len(),
        radix,
        max_key,
        passes
    );

    let mut divisor = 1_u64;
    counting_sort_into_with_ctx(
        src,
        |item| ((key(item) / divisor) % radix) as usize,
        table_len,
        target,
        ctx,
    )?;
    trace!("radix sort: pass 1/{} done", passes);
    if passes == 1 {
        return Ok(());
    }

    let mut scratch = target.to_vec();
    let mut in_target = true;
    for pass in 2..=passes {
        divisor *= radix;
        let digit = |item: &T| ((key(item) / divisor) % radix) as usize;
        if in_target {
            counting_sort_into_with_ctx(target, digit, table_len, &mut scratch, ctx)?;
        } else {
            counting_sort_into_with_ctx(&scratch, digit, table_len, target, ctx)?;
        }
        in_target = !in_target;
        trace!("radix sort: pass {}/{} done", pass, passes);
    }

    if !in_target {
        target.clone_from_slice(&scratch);
    }
    Ok(())
}

#[inline]
fn check_radix(radix: u64) -> Result<(), SortError> {
    if radix < 2 {
        return Err(SortError::InvalidRadix { radix });
    }
    Ok(())
}

/// Radix actually used and the size of its digit table. No digit exceeds
/// `min(radix - 1, max_key)`.
fn digit_table(radix: u64, max_key: u64) -> Result<(u64, usize), SortError> {
    let slots = (radix as u128).min(max_key as u128 + 1);
    if slots <= TUNED_PARAMS.max_counting_range as u128 {
        let table_len = usize::try_from(slots).map_err(|_| SortError::InvalidRadix { radix })?;
        return Ok((radix, table_len));
    }

    let fallback = TUNED_PARAMS.wide_radix_fallback;
    debug!(
        "radix sort: {} digit slots exceed {}, using radix {}",
        slots, TUNED_PARAMS.max_counting_range, fallback
    );
    let table_len = usize::try_from(fallback).map_err(|_| SortError::InvalidRadix { radix })?;
    Ok((fallback, table_len))
}
