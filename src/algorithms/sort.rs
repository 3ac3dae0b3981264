use std::cmp::Ordering;

/// Quicksort with a caller-supplied ordering.
///
/// Lomuto partitioning of each subrange. The pivot is the median of the
/// first, middle and last elements, so sorted and reverse-sorted input stay
/// $O(n \log n)$. Pending subranges live on an explicit work list, so
/// adversarial inputs cost time but never call-stack depth. Not stable.
///
/// ```rust
/// # use rhull::algorithms::sort::quick_sort_by;
/// let mut xs = [5, 1, 4, 1, 3];
/// quick_sort_by(&mut xs, |a, b| b.cmp(a));
/// assert_eq!(xs, [5, 4, 3, 1, 1]);
/// ```
pub fn quick_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
  F: FnMut(&T, &T) -> Ordering,
{
  // Inclusive index ranges still to be sorted.
  let mut work: Vec<(usize, usize)> = Vec::new();
  if items.len() > 1 {
    work.push((0, items.len() - 1));
  }
  while let Some((first, last)) = work.pop() {
    let mid = partition(items, first, last, &mut cmp);
    if mid > first + 1 {
      work.push((first, mid - 1));
    }
    if mid + 1 < last {
      work.push((mid + 1, last));
    }
  }
}

// Moves the median of `first`, the midpoint and `last` into `last`.
fn median_to_last<T, F>(items: &mut [T], first: usize, last: usize, cmp: &mut F)
where
  F: FnMut(&T, &T) -> Ordering,
{
  let mid = first + (last - first) / 2;
  if cmp(&items[mid], &items[first]) == Ordering::Less {
    items.swap(mid, first);
  }
  if cmp(&items[last], &items[first]) == Ordering::Less {
    items.swap(last, first);
  }
  // `first` now holds the smallest of the three.
  if cmp(&items[mid], &items[last]) == Ordering::Less {
    items.swap(mid, last);
  }
}

// Moves every element `<=` the pivot in front of it and returns the pivot's
// final index.
fn partition<T, F>(items: &mut [T], first: usize, last: usize, cmp: &mut F) -> usize
where
  F: FnMut(&T, &T) -> Ordering,
{
  if last - first >= 2 {
    median_to_last(items, first, last, cmp);
  }
  let mut store = first;
  for i in first..last {
    if cmp(&items[i], &items[last]) != Ordering::Greater {
      items.swap(i, store);
      store += 1;
    }
  }
  items.swap(store, last);
  store
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn trivial_inputs() {
    let mut empty: [i32; 0] = [];
    quick_sort_by(&mut empty, Ord::cmp);
    let mut one = [42];
    quick_sort_by(&mut one, Ord::cmp);
    assert_eq!(one, [42]);
    let mut two = [2, 1];
    quick_sort_by(&mut two, Ord::cmp);
    assert_eq!(two, [1, 2]);
  }

  #[test]
  fn all_equal() {
    let mut xs = vec![7; 1000];
    quick_sort_by(&mut xs, Ord::cmp);
    assert_eq!(xs, vec![7; 1000]);
  }

  #[test]
  fn presorted_input() {
    let mut xs: Vec<u32> = (0..200_000).collect();
    quick_sort_by(&mut xs, Ord::cmp);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));

    let mut rev: Vec<u32> = (0..200_000).rev().collect();
    quick_sort_by(&mut rev, Ord::cmp);
    assert_eq!(rev, xs);
  }

  #[test]
  fn median_of_three() {
    for mut xs in [[1, 2, 3], [3, 2, 1], [2, 3, 1], [1, 3, 2], [3, 1, 2], [2, 1, 3]] {
      median_to_last(&mut xs, 0, 2, &mut Ord::cmp);
      assert_eq!(xs[2], 2);
    }
  }

  #[proptest]
  fn matches_std_sort(#[strategy(vec(-50i32..50, 0..300))] xs: Vec<i32>) {
    let mut ours = xs.clone();
    quick_sort_by(&mut ours, Ord::cmp);
    let mut theirs = xs;
    theirs.sort_unstable();
    prop_assert_eq!(ours, theirs);
  }

  #[proptest]
  fn respects_comparator(#[strategy(vec(any::<i16>(), 0..300))] xs: Vec<i16>) {
    let mut desc = xs;
    quick_sort_by(&mut desc, |a, b| b.cmp(a));
    prop_assert!(desc.windows(2).all(|w| w[0] >= w[1]));
  }
}
