//! The ordering primitive used to pre-order input before balanced
//! construction: a plain comparison-based merge sort.
//!
//! The tree only requires the contract "given a sequence and a less-than
//! comparator, return a new ascending sequence". The functions here take the
//! input `Vec` by value, so the caller's data is never reordered underneath
//! them.

/// Sorts the given values ascending by `<` and returns the sorted sequence.
///
/// Sequences of length 0 or 1 are returned unchanged. The sort is not
/// stable: on ties the merge takes from the right run first.
///
/// # Examples
///
/// ```
/// use balanced_bst::sort::merge_sort;
///
/// assert_eq!(merge_sort(vec![8, 4, 13, 2]), vec![2, 4, 8, 13]);
/// assert_eq!(merge_sort(Vec::<i32>::new()), Vec::new());
/// ```
pub fn merge_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    merge_sort_by(values, |a, b| a < b)
}

/// Sorts the given values with an arbitrary less-than comparator.
///
/// `less_than(a, b)` must implement a total order. Runs in `O(n lg n)`.
///
/// # Examples
///
/// ```
/// use balanced_bst::sort::merge_sort_by;
///
/// // Descending order.
/// assert_eq!(merge_sort_by(vec![1, 3, 2], |a, b| a > b), vec![3, 2, 1]);
/// ```
pub fn merge_sort_by<T, F>(values: Vec<T>, mut less_than: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    split_and_merge(values, &mut less_than)
}

fn split_and_merge<T, F>(mut values: Vec<T>, less_than: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if values.len() <= 1 {
        return values;
    }

    let right = values.split_off(values.len() / 2);
    let left = split_and_merge(values, less_than);
    let right = split_and_merge(right, less_than);

    merge(left, right, less_than)
}

/// Merges two already-sorted runs into one sorted sequence.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, less_than: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if less_than(l, r) {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    // At most one run still has elements.
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_are_already_sorted() {
        assert_eq!(merge_sort(Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(merge_sort(vec![7]), vec![7]);
    }

    #[test]
    fn sorts_reversed_input() {
        assert_eq!(merge_sort(vec![5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(merge_sort(vec![3, 1, 3, 2, 1]), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn comparator_controls_direction() {
        let sorted = merge_sort_by(vec![2, 9, 4, 7], |a, b| a > b);
        assert_eq!(sorted, vec![9, 7, 4, 2]);
    }
}

#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn matches_std_sort(xs: Vec<i32>) -> bool {
            let mut expected = xs.clone();
            expected.sort();

            merge_sort(xs) == expected
        }
    }
}
