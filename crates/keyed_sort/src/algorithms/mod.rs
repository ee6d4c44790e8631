pub(crate) mod common;
pub mod counting_sort;
pub mod insertion_sort;
pub mod radix_sort;
