use thiserror::Error;

/// Rejected inputs. Every check runs before the first element is written, so a
/// failed call leaves the destination untouched.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    #[error("key range must be non-zero")]
    ZeroRange,
    #[error("radix must be at least 2, got {radix}")]
    InvalidRadix { radix: u64 },
    #[error("digit passes are numbered from 1")]
    ZeroPass,
    #[error("key {key} of element {index} is outside [0, {range})")]
    KeyOutOfRange {
        index: usize,
        key: usize,
        range: usize,
    },
    #[error("destination holds {actual} elements, input has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("destination holds {actual} elements, at least {required} required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("key range {range} exceeds the counting limit {limit}")]
    RangeTooLarge { range: u128, limit: usize },
}

#[inline]
pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<(), SortError> {
    if expected != actual {
        return Err(SortError::LengthMismatch { expected, actual });
    }
    Ok(())
}
