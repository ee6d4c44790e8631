#[inline]
pub fn min_max(data: &[u64]) -> Option<(u64, u64)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}

/// Turns occurrence counts into the start offset of each key's block.
#[inline]
pub fn exclusive_prefix_sum(counts: &mut [usize]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sum_gives_block_starts() {
        let mut counts = [1, 1, 2, 0, 0, 1];
        exclusive_prefix_sum(&mut counts);
        assert_eq!(counts, [0, 1, 2, 4, 4, 4]);
    }

    #[test]
    fn min_max_of_empty_is_none() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3, 9, 1]), Some((1, 9)));
    }
}
