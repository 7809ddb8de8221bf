//! Comparison sorts over totally ordered elements.
//!
//! | Function | Best | Average | Worst | In place | Stable |
//! |-|-|-|-|-|-|
//! | [`bubble_sort`] | `O(n)` | `O(n²)` | `O(n²)` | yes | yes |
//! | [`insertion_sort`] | `O(n)` | `O(n²)` | `O(n²)` | yes | yes |
//! | [`selection_sort`] | `O(n²)` | `O(n²)` | `O(n²)` | yes | no |
//! | [`merge_sort`] | `O(n log n)` | `O(n log n)` | `O(n log n)` | no | yes |
//! | [`quick_sort`] | `O(n log n)` | `O(n log n)` | `O(n²)` | yes | no |

mod bubble_sort;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod selection_sort;

pub use bubble_sort::*;
pub use insertion_sort::*;
pub use merge_sort::*;
pub use quick_sort::*;
pub use selection_sort::*;

/// Returns true if every element is less than or equal to the one after it.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
