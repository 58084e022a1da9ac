/// Shift-based insertion sort. Fastest choice below the small-size threshold and O(n) on
/// already sorted input.
pub(crate) fn insertion_sort(v: &mut [i32]) {
    for i in 1..v.len() {
        let key = v[i];

        // Shift larger predecessors one slot right, then drop the key into the gap.
        let mut hole = i;
        while hole > 0 && v[hole - 1] > key {
            v[hole] = v[hole - 1];
            hole -= 1;
        }

        v[hole] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_inputs() {
        let mut v: Vec<i32> = vec![];
        insertion_sort(&mut v);
        assert!(v.is_empty());

        let mut v = vec![5, 3, 8, 1, 9, 2];
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);

        let mut v = vec![2, 2, 2, 1];
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 2, 2]);
    }

    #[test]
    fn keeps_sorted_input_untouched() {
        let mut v: Vec<i32> = (0..100).collect();
        insertion_sort(&mut v);
        assert_eq!(v, (0..100).collect::<Vec<i32>>());
    }
}
