//! Descending merge sort
//!
//! Top-down merge sort driven by an explicit work stack instead of recursion.
//! Splits always happen at `len / 2`, so every input costs O(n log n) time and
//! O(n) auxiliary space regardless of how sorted it already is.

/// A unit of pending work over the half-open range `start..end`
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Split the range and schedule both halves plus their merge
    Sort { start: usize, end: usize },
    /// Merge the sorted runs `start..mid` and `mid..end`
    Merge { start: usize, mid: usize, end: usize },
}

/// Sort `values` from largest to smallest into a new vector
///
/// The input slice is never mutated. When the two heads of a merge are equal the right
/// run's element is taken first; the ordering is not stable.
///
/// # Examples
/// ```
/// use competition::ranking::merge_sort_descending;
///
/// let input = [12, 5, 34, 75, 8, 11];
/// assert_eq!(merge_sort_descending(&input), vec![75, 34, 12, 11, 8, 5]);
/// assert_eq!(input, [12, 5, 34, 75, 8, 11]);
/// ```
#[must_use]
pub fn merge_sort_descending<T: Ord + Copy>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    if sorted.len() < 2 {
        return sorted;
    }

    let mut scratch = Vec::with_capacity(sorted.len());
    let mut pending = vec![Task::Sort {
        start: 0,
        end: sorted.len(),
    }];

    while let Some(task) = pending.pop() {
        match task {
            Task::Sort { start, end } => {
                if end - start < 2 {
                    continue;
                }
                let mid = start + (end - start) / 2;

                // Popped in reverse: left half, right half, then the merge
                pending.push(Task::Merge { start, mid, end });
                pending.push(Task::Sort { start: mid, end });
                pending.push(Task::Sort { start, end: mid });
            }
            Task::Merge { start, mid, end } => {
                merge_runs(&mut sorted, &mut scratch, start, mid, end);
            }
        }
    }

    sorted
}

/// Merge two adjacent descending runs in place, using `scratch` as the output buffer
fn merge_runs<T: Ord + Copy>(
    values: &mut [T],
    scratch: &mut Vec<T>,
    start: usize,
    mid: usize,
    end: usize,
) {
    scratch.clear();
    let (mut left, mut right) = (start, mid);

    while left < mid && right < end {
        if values[left] > values[right] {
            scratch.push(values[left]);
            left += 1;
        } else {
            scratch.push(values[right]);
            right += 1;
        }
    }

    scratch.extend_from_slice(&values[left..mid]);
    scratch.extend_from_slice(&values[right..end]);
    values[start..end].copy_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample_descending() {
        assert_eq!(
            merge_sort_descending(&[12, 5, 34, 75, 8, 11]),
            vec![75, 34, 12, 11, 8, 5]
        );
    }

    #[test]
    fn base_cases_are_copies() {
        let empty: [i64; 0] = [];
        assert!(merge_sort_descending(&empty).is_empty());
        assert_eq!(merge_sort_descending(&[42]), vec![42]);
    }

    #[test]
    fn two_elements() {
        assert_eq!(merge_sort_descending(&[1, 2]), vec![2, 1]);
        assert_eq!(merge_sort_descending(&[2, 1]), vec![2, 1]);
    }

    #[test]
    fn duplicates_stay_adjacent() {
        assert_eq!(merge_sort_descending(&[9, 3, 9]), vec![9, 9, 3]);
        assert_eq!(merge_sort_descending(&[4, 4, 4, 4]), vec![4, 4, 4, 4]);
    }

    #[test]
    fn negatives_and_extremes() {
        assert_eq!(
            merge_sort_descending(&[0, i64::MIN, -7, i64::MAX, 3]),
            vec![i64::MAX, 3, 0, -7, i64::MIN]
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![3, 1, 2];
        let sorted = merge_sort_descending(&input);
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn already_sorted_and_reversed() {
        let ascending: Vec<i64> = (0..1000).collect();
        let descending: Vec<i64> = (0..1000).rev().collect();

        assert_eq!(merge_sort_descending(&ascending), descending);
        assert_eq!(merge_sort_descending(&descending), descending);
    }

    #[test]
    fn matches_std_sort_on_large_input() {
        let values: Vec<i64> = (0..100_003_i64).map(|i| (i * 7919) % 1013 - 500).collect();
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        assert_eq!(merge_sort_descending(&values), expected);
    }
}
