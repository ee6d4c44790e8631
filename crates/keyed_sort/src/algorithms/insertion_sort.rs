//! Stable comparator-driven insertion sort.
//!
//! The sorted prefix grows by one element per step; the new element is swapped
//! towards the front while it is strictly less than its left neighbour, so equal
//! elements never pass each other.

use crate::error::SortError;

/// Sorts `data` ascending by its natural ordering.
pub fn insertion_sort<T: PartialOrd>(data: &mut [T]) {
    insertion_sort_by(data, |a, b| a < b);
}

/// Sorts `data` in place so that no element is `less_than` its predecessor.
pub fn insertion_sort_by<T, F>(data: &mut [T], mut less_than: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in 1..data.len() {
        sift_back(&mut data[..=end], &mut less_than);
    }
}

/// Copies `src` into the front of `target` in ascending natural order.
pub fn insertion_sort_into<T>(src: &[T], target: &mut [T]) -> Result<(), SortError>
where
    T: Clone + PartialOrd,
{
    insertion_sort_into_by(src, target, |a, b| a < b)
}

/// Copies `src` into `target[..src.len()]` sorted by `less_than`, leaving `src`
/// untouched. Slots of `target` past `src.len()` are not written.
pub fn insertion_sort_into_by<T, F>(
    src: &[T],
    target: &mut [T],
    mut less_than: F,
) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if target.len() < src.len() {
        return Err(SortError::BufferTooSmall {
            required: src.len(),
            actual: target.len(),
        });
    }

    for (i, item) in src.iter().enumerate() {
        target[i].clone_from(item);
        sift_back(&mut target[..=i], &mut less_than);
    }
    Ok(())
}

#[inline]
fn sift_back<T, F>(sorted: &mut [T], less_than: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut back = sorted.len() - 1;
    while back > 0 && less_than(&sorted[back], &sorted[back - 1]) {
        sorted.swap(back, back - 1);
        back -= 1;
    }
}
