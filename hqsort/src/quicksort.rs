use crate::heapsort::heapsort;
use crate::smallsort::insertion_sort;

/// Sorts `v` recursively with Lomuto-partition quicksort.
///
/// `limit` is the number of partitions allowed on any path before the remaining segment is
/// handed to heapsort. If zero, the whole slice is heapsorted.
pub(crate) fn quicksort(v: &mut [i32], insertion_threshold: usize, limit: u32) {
    // The pivot generator is seeded from the input length, so equal inputs take equal pivot
    // sequences and the sort stays deterministic across processes.
    let mut rand_state = (v.len() | 1) as u32;

    recurse(v, insertion_threshold, limit, &mut rand_state);
}

fn recurse(mut v: &mut [i32], insertion_threshold: usize, mut limit: u32, rand_state: &mut u32) {
    loop {
        let len = v.len();

        if len < 2 {
            return;
        }

        if len < insertion_threshold {
            insertion_sort(v);
            return;
        }

        // The pivots on this path kept landing badly. Heapsort the remainder to hold the
        // `O(n * log(n))` worst case.
        if limit == 0 {
            heapsort(v);
            return;
        }

        limit -= 1;

        let mid = partition(v, rand_state);

        // Split the slice into `left`, the pivot, and `right`. The pivot is already in its
        // final position.
        let (left, right) = v.split_at_mut(mid);

        // Recurse into the left side. The recursion limit bounds the stack either way, so there
        // is no benefit in picking the shorter side.
        recurse(left, insertion_threshold, limit, rand_state);

        // Continue with the right side, minus the pivot.
        v = &mut right[1..];
    }
}

/// Lomuto partition around a pseudorandom pivot. Returns the final pivot position.
///
/// Elements equal to the pivot are grouped into the left partition.
fn partition(v: &mut [i32], rand_state: &mut u32) -> usize {
    let len = v.len();
    debug_assert!(len >= 2);

    // Move a randomly chosen pivot into the last slot.
    let pivot_idx = (xorshift(rand_state) as usize) % len;
    v.swap(pivot_idx, len - 1);
    let pivot = v[len - 1];

    // Grow a prefix of elements `<=` the pivot.
    let mut lt_count = 0;
    for i in 0..len - 1 {
        if v[i] <= pivot {
            v.swap(lt_count, i);
            lt_count += 1;
        }
    }

    v.swap(lt_count, len - 1);

    lt_count
}

// Pseudorandom number generator from "Xorshift RNGs" by George Marsaglia.
fn xorshift(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;

    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_splits_around_pivot() {
        let mut rand_state = 12345u32;

        for len in [2usize, 3, 7, 64, 499] {
            let mut v: Vec<i32> = (0..len as i32).rev().collect();
            let mid = partition(&mut v, &mut rand_state);

            assert!(mid < len);
            let pivot = v[mid];
            assert!(v[..mid].iter().all(|x| *x <= pivot));
            assert!(v[mid + 1..].iter().all(|x| *x > pivot));
        }
    }

    #[test]
    fn partition_groups_ties_left() {
        let mut rand_state = 98765u32;

        let mut v = vec![4; 128];
        let mid = partition(&mut v, &mut rand_state);

        // All elements compare `<=` to the pivot, so everything but the pivot slot is swept
        // into the left partition.
        assert_eq!(mid, 127);
    }
}
